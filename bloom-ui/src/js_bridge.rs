//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js chart functions live in `assets/js/*.js`, are embedded at compile
//! time, and are evaluated as globals once D3 has loaded. The wrappers here
//! serialize nothing themselves; callers pass JSON strings built with
//! `serde_json`.

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static AREA_CHART_JS: &str = include_str!("../assets/js/area-chart.js");

/// Render polls give up after this many 100ms ticks (10 seconds).
const MAX_POLL_TICKS: u32 = 100;

#[cfg(target_arch = "wasm32")]
fn eval(code: &str) {
    let _ = js_sys::eval(code);
}

// Native builds (unit tests, SSR) have no JS engine.
#[cfg(not(target_arch = "wasm32"))]
fn eval(code: &str) {
    log::trace!("skipping JS eval off wasm ({} bytes)", code.len());
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Bloom JS call failed:', e); }}",
        code
    );
    eval(&wrapped);
}

/// Escape a JSON payload for embedding in a single-quoted JS string literal.
pub fn escape_js_single_quoted(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "")
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// Safe to call more than once: the scripts are only evaluated if
/// `window.__bloomChartsReady` is not yet set.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, AREA_CHART_JS].join("\n");

    let store_js = format!(
        "if (!window.__bloomChartsReady) {{ window.__bloomChartScripts = {}; }}",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__bloomChartsReady || window.__bloomChartsPending) return;
            window.__bloomChartsPending = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    // Indirect eval so the declarations land at global scope
                    (0, eval)(window.__bloomChartScripts);
                    delete window.__bloomChartScripts;
                    if (typeof renderAreaChart !== 'undefined') window.renderAreaChart = renderAreaChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__bloomChartsReady = true;
                    delete window.__bloomChartsPending;
                    console.log('Bloom charts initialized');
                }
            }, 100);
        })();
    "#;
    eval(init_js);
}

/// Render the monthly NDVI area chart.
///
/// Polls until D3.js is loaded, the chart scripts are initialized and the
/// container element exists. A newer render or [`destroy_chart`] for the same
/// container cancels a pending poll, and the poll stops on its own after
/// `MAX_POLL_TICKS` ticks.
pub fn render_area_chart(container_id: &str, data_json: &str, config_json: &str) {
    call_js(&area_chart_script(container_id, data_json, config_json));
}

/// Clear any chart drawn in the given container and cancel its pending poll.
pub fn destroy_chart(container_id: &str) {
    call_js(&destroy_chart_script(container_id));
}

fn area_chart_script(container_id: &str, data_json: &str, config_json: &str) -> String {
    let escaped_data = escape_js_single_quoted(data_json);
    let escaped_config = escape_js_single_quoted(config_json);
    format!(
        r#"
        (function() {{
            var polls = window.__bloomChartPolls = window.__bloomChartPolls || {{}};
            if (polls['{container_id}']) clearInterval(polls['{container_id}']);
            var ticks = 0;
            var poll = setInterval(function() {{
                ticks += 1;
                if (window.__bloomChartsReady &&
                    typeof window.renderAreaChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    delete polls['{container_id}'];
                    try {{
                        window.renderAreaChart('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[Bloom] renderAreaChart error:', e); }}
                }} else if (ticks >= {max_ticks}) {{
                    clearInterval(poll);
                    delete polls['{container_id}'];
                    console.warn('[Bloom] gave up waiting for chart container {container_id}');
                }}
            }}, 100);
            polls['{container_id}'] = poll;
        }})();
        "#,
        max_ticks = MAX_POLL_TICKS,
    )
}

fn destroy_chart_script(container_id: &str) -> String {
    format!(
        "var polls = window.__bloomChartPolls || {{}}; \
         if (polls['{id}']) {{ clearInterval(polls['{id}']); delete polls['{id}']; }} \
         var el = document.getElementById('{id}'); if (el) el.innerHTML = '';",
        id = container_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_quotes_and_newlines() {
        let json = "{\"title\":\"Farmer's \\\"view\\\"\"}\n";
        let escaped = escape_js_single_quoted(json);
        assert_eq!(escaped, "{\"title\":\"Farmer\\'s \\\\\"view\\\\\"\"}");
        assert!(!escaped.contains('\n'));
    }

    #[test]
    fn test_render_poll_is_capped_and_registered() {
        let script = area_chart_script("ndvi-trend-chart", "[]", "{}");
        assert!(script.contains("ticks >= 100"));
        assert!(script.contains("polls['ndvi-trend-chart'] = poll"));
        assert!(script.contains("if (polls['ndvi-trend-chart']) clearInterval(polls['ndvi-trend-chart'])"));
    }

    #[test]
    fn test_destroy_cancels_pending_poll() {
        let script = destroy_chart_script("ndvi-trend-chart");
        assert!(script.contains("clearInterval(polls['ndvi-trend-chart'])"));
        assert!(script.contains("el.innerHTML = ''"));
    }

    #[test]
    fn test_calls_are_noops_off_wasm() {
        init_charts();
        render_area_chart("ndvi-trend-chart", "[]", "{}");
        destroy_chart("ndvi-trend-chart");
    }
}
