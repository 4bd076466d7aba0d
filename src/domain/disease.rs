//! Disease domains and their static form profiles.
//!
//! Field order in each profile is the feature order the exported model was
//! fitted on. Reordering a table silently breaks the classifier contract.

use serde::{Deserialize, Serialize};

/// One of the three supported prediction contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disease {
    Diabetes,
    HeartDisease,
    Parkinsons,
}

impl Disease {
    /// All domains, in selector order.
    pub const ALL: [Disease; 3] = [Self::Diabetes, Self::HeartDisease, Self::Parkinsons];

    /// Static profile for this domain.
    #[must_use]
    pub fn profile(self) -> &'static DomainProfile {
        match self {
            Self::Diabetes => &DIABETES,
            Self::HeartDisease => &HEART_DISEASE,
            Self::Parkinsons => &PARKINSONS,
        }
    }

    /// Position in the selector.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Diabetes => 0,
            Self::HeartDisease => 1,
            Self::Parkinsons => 2,
        }
    }

    /// Next domain in the selector (wraps).
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous domain in the selector (wraps).
    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for Disease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.profile().title)
    }
}

/// Compile-time description of one domain's form and verdicts.
#[derive(Debug)]
pub struct DomainProfile {
    pub disease: Disease,
    /// Selector title
    pub title: &'static str,
    /// Label of the submit action
    pub action: &'static str,
    /// Ordered field labels (model feature order)
    pub fields: &'static [&'static str],
    /// Reference notes shown beside the form. Keys are free text.
    pub descriptions: &'static [(&'static str, &'static str)],
    /// Model artifact file name inside the model directory
    pub model_file: &'static str,
    /// Shown when the classifier returns 1
    pub positive_message: &'static str,
    /// Shown for any other label
    pub negative_message: &'static str,
    /// Demonstration row loaded with the sample-data key
    pub sample: &'static [&'static str],
}

impl DomainProfile {
    /// Number of features the domain's classifier expects.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Verdict text for a classifier label.
    #[must_use]
    pub fn message_for(&self, label: u8) -> &'static str {
        if label == 1 {
            self.positive_message
        } else {
            self.negative_message
        }
    }
}

static DIABETES: DomainProfile = DomainProfile {
    disease: Disease::Diabetes,
    title: "Diabetes Prediction",
    action: "Predict Diabetes",
    fields: &[
        "Pregnancies",
        "Glucose Level",
        "Blood Pressure",
        "Skin Thickness",
        "Insulin Level",
        "BMI",
        "Diabetes Pedigree Function",
        "Age",
    ],
    descriptions: &[
        ("Glucose", "Normal: 70-99 mg/dL"),
        ("Blood Pressure", "Normal: 120/80 mmHg"),
        ("BMI (Body Mass Index)", "Normal: 18.5-24.9"),
    ],
    model_file: "final_diabetes_model.json",
    positive_message: "The person is diabetic",
    negative_message: "The person is not diabetic",
    sample: &["1", "85", "66", "29", "0", "26.6", "0.351", "31"],
};

static HEART_DISEASE: DomainProfile = DomainProfile {
    disease: Disease::HeartDisease,
    title: "Heart Disease Prediction",
    action: "Predict Heart Disease",
    fields: &[
        "Age",
        "Sex (Enter 0 for Female, 1 for Male)",
        "CP (Chest Pain Type)",
        "Trestbps (Resting Blood Pressure)",
        "Chol (Cholesterol Level)",
        "FBS (Fasting Blood Sugar)",
        "RestECG (Resting ECG)",
        "Thalach (Max Heart Rate)",
        "Exang (Exercise Induced Angina)",
        "Oldpeak (ST Depression)",
        "Slope (Slope of Peak Exercise ST Segment)",
        "CA (Number of Major Vessels)",
        "Thal (Thalassemia Type)",
    ],
    descriptions: &[
        ("Sex", "Enter 0 for Female, 1 for Male"),
        ("Chol", "Normal: <200 mg/dL"),
        ("FBS", "Normal: <100 mg/dL"),
        ("Trestbps", "Normal: 120/80 mmHg"),
        ("Oldpeak", "ST depression induced by exercise"),
    ],
    model_file: "final_heart_model.json",
    positive_message: "The person has heart disease",
    negative_message: "The person does not have heart disease",
    sample: &[
        "63", "1", "3", "145", "233", "1", "0", "150", "0", "2.3", "0", "0", "1",
    ],
};

static PARKINSONS: DomainProfile = DomainProfile {
    disease: Disease::Parkinsons,
    title: "Parkinson's Disease Prediction",
    action: "Predict Parkinson's Disease",
    fields: &[
        "MDVP:Fo(Hz)",
        "MDVP:Fhi(Hz)",
        "MDVP:Flo(Hz)",
        "MDVP:Jitter(%)",
        "MDVP:Jitter(Abs)",
        "MDVP:RAP",
        "MDVP:PPQ",
        "Jitter:DDP",
        "MDVP:Shimmer",
        "MDVP:Shimmer(dB)",
        "Shimmer:APQ3",
        "Shimmer:APQ5",
        "MDVP:APQ",
        "Shimmer:DDA",
        "NHR",
        "HNR",
        "RPDE",
        "DFA",
        "Spread1",
        "Spread2",
        "D2",
        "PPE",
    ],
    descriptions: &[
        ("MDVP:Fo(Hz)", "Fundamental Frequency of Voice"),
        ("MDVP:Fhi(Hz)", "Highest Fundamental Frequency"),
        ("MDVP:Flo(Hz)", "Lowest Fundamental Frequency"),
        ("MDVP:Jitter(%)", "Variability in pitch (Jitter)"),
        ("MDVP:Jitter(Abs)", "Absolute Jitter"),
        ("MDVP:RAP", "Relative Amplitude Perturbation"),
        ("MDVP:PPQ", "Pitch Period Perturbation Quotient"),
        (
            "Jitter:DDP",
            "Average absolute difference of differences between consecutive pitch periods",
        ),
        ("MDVP:Shimmer", "Variation in amplitude"),
        ("MDVP:Shimmer(dB)", "Shimmer in decibels"),
        ("Shimmer:APQ3", "Three-point Amplitude Perturbation Quotient"),
        ("Shimmer:APQ5", "Five-point Amplitude Perturbation Quotient"),
        ("MDVP:APQ", "Amplitude Perturbation Quotient"),
        (
            "Shimmer:DDA",
            "Average absolute differences of differences between consecutive periods in amplitude",
        ),
        (
            "NHR",
            "Noise-to-Harmonics Ratio (higher values indicate voice disorders)",
        ),
        (
            "HNR",
            "Harmonics-to-Noise Ratio (lower values indicate voice disorders)",
        ),
        (
            "RPDE",
            "Recurrence Period Density Entropy (measures complexity of voice)",
        ),
        (
            "DFA",
            "Detrended Fluctuation Analysis (measures signal randomness)",
        ),
        ("Spread1", "Nonlinear measure of fundamental frequency variation"),
        ("Spread2", "Another measure of frequency variation"),
        ("D2", "Signal Complexity Measure"),
        ("PPE", "Pitch Period Entropy"),
    ],
    model_file: "final_parkinsons_model.json",
    positive_message: "The person has Parkinson's Disease",
    negative_message: "The person does not have Parkinson's Disease",
    sample: &[
        "119.992", "157.302", "74.997", "0.00784", "0.00007", "0.0037", "0.00554", "0.01109",
        "0.04374", "0.426", "0.02182", "0.0313", "0.02971", "0.06545", "0.02211", "21.033",
        "0.414783", "0.815285", "-4.813031", "0.266482", "2.301442", "0.284654",
    ],
};
