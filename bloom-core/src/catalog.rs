//! Fixed descriptive content for the explainer pages.
//!
//! Everything here is `'static` and rendered as-is; no page derives anything
//! from it.

/// A stage of the data collection and preprocessing pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineStep {
    pub title: &'static str,
    pub description: &'static str,
    pub tools: &'static [&'static str],
}

/// A bloom detection or analysis approach.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionModel {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    /// Reported accuracy in percent, if known
    pub accuracy: Option<u8>,
    pub tools: &'static [&'static str],
}

/// A real-world application of bloom monitoring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaseStudy {
    pub title: &'static str,
    pub location: &'static str,
    pub image_url: &'static str,
    pub application: &'static str,
    pub narrative: &'static str,
}

/// Responsibility summary shown under each explainer page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeadRole {
    pub title: &'static str,
    pub description: &'static str,
}

/// One bullet of an implementation guide section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideItem {
    pub heading: &'static str,
    pub body: &'static str,
}

/// Next steps for one project lead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuidelineSection {
    pub title: &'static str,
    pub lead: &'static str,
    pub summary: &'static str,
    pub items: &'static [GuideItem],
}

/// A backend endpoint the guide proposes. Nothing in the app calls these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProposedEndpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub returns: &'static str,
}

pub const PIPELINE_STEPS: [PipelineStep; 4] = [
    PipelineStep {
        title: "1. Identify & Collect Data",
        description: "Identify and download suitable NASA datasets like MODIS, Landsat, and VIIRS. Use Google Earth Engine (GEE) for accessing large-scale time series data efficiently.",
        tools: &["Google Earth Engine", "sentinelsat", "earthengine-api"],
    },
    PipelineStep {
        title: "2. Preprocess Raw Data",
        description: "Apply essential corrections to raw satellite imagery. This includes atmospheric correction, radiometric calibration, and masking out clouds and shadows to ensure data quality.",
        tools: &["Python", "Rasterio", "GDAL"],
    },
    PipelineStep {
        title: "3. Extract Vegetation Indices",
        description: "Calculate indices like NDVI, EVI, and SAVI to quantify vegetation greenness and health. These indices are crucial for detecting changes and identifying bloom events.",
        tools: &["NumPy", "xarray", "Remote Sensing Knowledge"],
    },
    PipelineStep {
        title: "4. Prepare for Analysis",
        description: "Align temporal data into daily, monthly, or seasonal composites. Export the cleaned, processed data into analysis-ready formats like CSV or GeoTIFF time series.",
        tools: &["GeoPandas", "Pandas", "CSV", "GeoTIFF"],
    },
];

pub const PIPELINE_LEAD: LeadRole = LeadRole {
    title: "Lead: The Data Collector & Cleaner",
    description: "This role is responsible for ensuring the project has a foundation of clean, reliable, and well-documented data. The output is a structured, preprocessed dataset of bloom-related parameters (e.g., NDVI time series) and the scripts used to generate it. This is the first and most critical step for the entire project.",
};

pub const DETECTION_MODELS: [DetectionModel; 4] = [
    DetectionModel {
        title: "Time-Series Analysis",
        category: "Statistical Model",
        description: "Utilizes moving averages and thresholding on NDVI data to define the onset, peak, and decline of bloom cycles. A robust baseline for identifying significant greening events.",
        accuracy: Some(88),
        tools: &["statsmodels", "tslearn", "Pandas"],
    },
    DetectionModel {
        title: "Random Forest Classifier",
        category: "Machine Learning",
        description: "A supervised model trained on spectral signatures and temporal features to classify pixels as 'bloom' or 'non-bloom'. Excellent for handling complex, non-linear relationships in the data.",
        accuracy: Some(94),
        tools: &["Scikit-learn", "Python", "Supervised ML"],
    },
    DetectionModel {
        title: "LSTM Network",
        category: "Deep Learning",
        description: "A Long Short-Term Memory (LSTM) network that analyzes sequences of satellite observations to predict the likelihood of a future bloom. Ideal for capturing temporal dependencies.",
        accuracy: Some(91),
        tools: &["TensorFlow", "PyTorch", "Keras"],
    },
    DetectionModel {
        title: "Convolutional Neural Network (CNN)",
        category: "Deep Learning",
        description: "A CNN that operates directly on multispectral satellite images, learning spatial and spectral patterns to identify different types of vegetation and crop blooms with high precision.",
        accuracy: Some(96),
        tools: &["TensorFlow", "PyTorch", "Spectral Classification"],
    },
];

pub const MODELS_LEAD: LeadRole = LeadRole {
    title: "Lead: The Bloom Detector",
    description: "This role develops the core algorithms that power the dashboard. Responsibilities include defining a 'bloom event,' performing time-series analysis, and building predictive models. The final deliverable is a validated bloom detection model and analytical results like trend graphs and maps.",
};

pub const CASE_STUDIES: [CaseStudy; 4] = [
    CaseStudy {
        title: "Cherry Blossoms in Japan",
        location: "Kyoto, Japan",
        image_url: "https://picsum.photos/seed/japan/600/400",
        application: "Tourism & Climate Studies",
        narrative: "Tracking the iconic 'sakura' bloom provides crucial data for tourism and serves as a sensitive indicator of climate change, as bloom timings have shifted earlier over the decades.",
    },
    CaseStudy {
        title: "Desert Wildflowers in the US",
        location: "Arizona, USA",
        image_url: "https://picsum.photos/seed/arizona/600/400",
        application: "Ecology & Conservation",
        narrative: "Monitoring 'superblooms' in arid regions helps ecologists understand plant-pollinator interactions and the resilience of desert ecosystems to climatic shifts like El Niño events.",
    },
    CaseStudy {
        title: "Cotton Bloom in India",
        location: "Maharashtra, India",
        image_url: "https://eoimages.gsfc.nasa.gov/images/imagerecords/145000/145591/irrigatedfarmland_oli_2019163_lrg.jpg",
        application: "Agriculture & Yield Prediction",
        narrative: "Detecting the peak flowering stage of cotton crops enables farmers to optimize irrigation and pesticide application, leading to better yield predictions and improved crop management.",
    },
    CaseStudy {
        title: "Pollen Surges in North America",
        location: "Continental USA",
        image_url: "https://www.nasa.gov/wp-content/uploads/2023/04/north-america-forests-2020.jpg",
        application: "Public Health",
        narrative: "By monitoring the greening of forests and grasslands, we can predict the timing and intensity of pollen surges, providing early warnings for allergy sufferers and public health agencies.",
    },
];

pub const CASE_STUDIES_LEAD: LeadRole = LeadRole {
    title: "Lead: The Communicator & Strategist",
    description: "This role bridges the gap between the technical project and its stakeholders. The goal is to identify target applications, conduct case studies, and craft compelling narratives that showcase the project's value to farmers, conservationists, and policymakers. The final output is a polished report and presentation demonstrating the tool's usability.",
};

pub const GUIDE_INTRO: &str = "This application is a fully functional frontend prototype. It uses mock data to simulate the entire workflow. Below are the next steps for each project lead to replace the mock components with a real, data-driven backend.";

pub const GUIDELINE_SECTIONS: [GuidelineSection; 3] = [
    GuidelineSection {
        title: "Step 1: Data Collection & Preprocessing",
        lead: "Data Lead",
        summary: "Your goal is to build the data pipeline that feeds this dashboard. The current mock data for bloom events and time series charts needs to be replaced with real, processed satellite data.",
        items: &[
            GuideItem {
                heading: "Setup Backend Service",
                body: "Create a backend server that can serve data via a REST API.",
            },
            GuideItem {
                heading: "Connect to GEE/NASA APIs",
                body: "Implement logic in your backend to connect to Google Earth Engine or other NASA data sources. Use libraries like earthengine-api to query and download time-series data for specific regions and vegetation indices (NDVI, EVI).",
            },
            GuideItem {
                heading: "Implement Preprocessing",
                body: "Your backend should perform the steps outlined in the 'Data Pipeline' section (cloud masking, calibration, etc.).",
            },
            GuideItem {
                heading: "Create API Endpoints",
                body: "Expose bloom events and monthly NDVI values per year (see the proposed endpoints below).",
            },
            GuideItem {
                heading: "Update Frontend",
                body: "Load the dashboard data from the new API endpoints instead of the embedded bloom_events.csv and ndvi_series.csv fixtures.",
            },
        ],
    },
    GuidelineSection {
        title: "Step 2: Bloom Detection & Analysis",
        lead: "Detection Lead",
        summary: "Your task is to implement the detection models and integrate them into the backend. The static accuracy numbers and model descriptions should become dynamic and based on real model performance.",
        items: &[
            GuideItem {
                heading: "Develop Models",
                body: "Using libraries like Scikit-learn, TensorFlow, or PyTorch, implement the bloom detection models (e.g., Random Forest, LSTM) described in the 'Detection Models' section.",
            },
            GuideItem {
                heading: "Train & Validate",
                body: "Use the preprocessed data from the Data Lead to train and validate your models. Use ground-truth data where possible.",
            },
            GuideItem {
                heading: "Integrate with Backend",
                body: "The trained models should be part of the backend service. The /api/bloom-events endpoint should return the output of your model.",
            },
            GuideItem {
                heading: "(Optional) Generated Insights",
                body: "Use a language model in the backend to generate automatic summaries of bloom trends, e.g. the key differences in vegetation blooms between 2023 and 2024.",
            },
        ],
    },
    GuidelineSection {
        title: "Step 3: Tool Enhancement & Narrative Generation",
        lead: "Visualization & Tool Development Lead",
        summary: "Your role is to enhance the frontend with real-time data and dynamic content generated by the backend.",
        items: &[
            GuideItem {
                heading: "Real Mapping Library",
                body: "Replace the image-backed bloom map with an interactive mapping library like Leaflet or Mapbox GL JS to display real GeoJSON data.",
            },
            GuideItem {
                heading: "Backend for Narratives",
                body: "Create a backend endpoint (/api/generate-narrative) that calls the text generation API with a server-side key. Never expose API keys on the frontend.",
            },
            GuideItem {
                heading: "Dynamic Content",
                body: "Use the narrative endpoint to replace static text, for instance the case study narratives.",
            },
        ],
    },
];

pub const PROPOSED_ENDPOINTS: [ProposedEndpoint; 3] = [
    ProposedEndpoint {
        method: "GET",
        path: "/api/bloom-events?year=[year]",
        returns: "GeoJSON of detected blooms",
    },
    ProposedEndpoint {
        method: "GET",
        path: "/api/ndvi-series?year=[year]&region=[region]",
        returns: "Monthly NDVI values",
    },
    ProposedEndpoint {
        method: "POST",
        path: "/api/generate-narrative",
        returns: "A generated case study narrative",
    },
];

/// Conceptual server-side handler shown on the guide page.
pub const NARRATIVE_BACKEND_EXAMPLE: &str = r#"// Conceptual server-side code
app.post('/api/generate-narrative', async (req, res) => {
    const data = req.body;
    const prompt = `Create a short, engaging narrative for a case study about a ${data.bloom_type} bloom in ${data.location} which had an intensity of ${data.intensity}.`;

    // Call the text generation API here with a server-side key.
    const generated_text = `A significant ${data.bloom_type} event was observed in ${data.location}...`;

    res.json({ narrative: generated_text });
});"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(PIPELINE_STEPS.len(), 4);
        assert_eq!(DETECTION_MODELS.len(), 4);
        assert_eq!(CASE_STUDIES.len(), 4);
        assert_eq!(GUIDELINE_SECTIONS.len(), 3);
    }

    #[test]
    fn test_every_card_has_tools() {
        assert!(PIPELINE_STEPS.iter().all(|s| !s.tools.is_empty()));
        assert!(DETECTION_MODELS.iter().all(|m| !m.tools.is_empty()));
    }

    #[test]
    fn test_accuracy_is_a_percentage() {
        for model in DETECTION_MODELS {
            if let Some(acc) = model.accuracy {
                assert!(acc <= 100, "{} accuracy {}", model.title, acc);
            }
        }
    }

    #[test]
    fn test_endpoints_are_api_paths() {
        assert!(PROPOSED_ENDPOINTS.iter().all(|e| e.path.starts_with("/api/")));
    }
}
