use serde::Deserialize;

/// One submitted symptom report, as sent by the intake form.
///
/// Every recognized field is optional and treated as an opaque display
/// string; the prompt builder substitutes placeholders for anything missing.
/// There is no cross-field validation and unrecognized keys are ignored,
/// matching the permissive intake contract. Option vocabularies (e.g. for
/// onset speed) live in the frontend only.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    /// UI language code ("en", "ko", "ja", "es") forwarded by the frontend.
    pub user_language: Option<String>,

    // Basic information (both categories)
    pub breed: Option<String>,
    pub age: Option<String>,
    pub sex: Option<String>,
    pub neutered: Option<String>,
    pub weight_info: Option<String>,

    // Main symptoms & history (both categories)
    pub main_complaint: Option<String>,
    pub first_noticed: Option<String>,
    pub onset_speed: Option<String>,
    pub previous_issues: Option<String>,
    pub progress: Option<String>,

    // Skin: lesion distribution
    pub initial_location: Option<String>,
    pub spread: Option<String>,
    pub current_location: Option<String>,
    pub symmetry: Option<String>,
    pub seasonality: Option<String>,

    // Skin: itchiness
    pub is_itchy: Option<String>,
    pub pruritus_score: Option<String>,
    pub itch_method: Option<Vec<String>>,
    pub itch_location: Option<String>,
    pub itch_lesion_onset: Option<String>,
    pub steroid_response: Option<String>,
    pub apoquel_response: Option<String>,

    // Skin: lesion characteristics
    pub lesion_types: Option<Vec<String>>,
    pub skin_texture: Option<String>,
    pub odor: Option<String>,

    // Skin: environment & management
    pub indoor_outdoor: Option<String>,
    pub walk_environment: Option<String>,
    pub env_changes: Option<String>,
    pub grooming_freq: Option<String>,
    pub shampoo: Option<String>,
    pub bedding: Option<String>,
    pub contact_irritants: Option<String>,

    // Diet (both categories)
    pub main_food: Option<String>,
    pub food_since: Option<String>,
    pub treats: Option<String>,
    pub diet_change: Option<String>,
    pub rx_diet_trial: Option<String>,
    pub gi_symptoms: Option<String>,

    // Skin: parasite control
    pub parasite_control_active: Option<String>,
    pub parasite_product: Option<String>,
    pub parasite_frequency: Option<String>,
    pub parasite_last_date: Option<String>,
    pub flea_tick_seen: Option<String>,

    // Contagion
    pub other_pets_affected: Option<String>,
    pub humans_affected: Option<String>,

    // General health
    pub other_symptoms: Option<String>,
    pub preexisting_conditions: Option<String>,
    pub current_meds: Option<String>,
    pub vaccination_status: Option<String>,

    // Digestive: history & diet
    pub symptom_pattern: Option<String>,
    pub eating_habits: Option<String>,
    pub scavenging: Option<String>,
    pub toy_ingestion: Option<String>,
    pub toxin_exposure: Option<String>,

    // Digestive: vomiting
    pub is_vomiting: Option<String>,
    pub vomit_frequency: Option<String>,
    pub vomit_timing: Option<String>,
    pub vomit_contents: Option<Vec<String>>,
    pub vomit_effort: Option<String>,

    // Digestive: diarrhea
    pub is_diarrhea: Option<String>,
    pub diarrhea_frequency: Option<String>,
    pub diarrhea_consistency: Option<Vec<String>>,
    pub diarrhea_straining: Option<String>,
    pub diarrhea_accidents: Option<String>,
    pub diarrhea_odor: Option<String>,

    // Digestive: appetite & other signs
    pub appetite: Option<String>,
    pub thirst: Option<String>,
    pub borborygmi: Option<String>,
    pub abdominal_pain: Option<String>,
    pub flatulence: Option<String>,
    pub lip_smacking_drooling: Option<String>,
    pub lethargy: Option<String>,
    pub fever: Option<String>,
    pub gum_color: Option<String>,
    pub deworming_status: Option<String>,
    pub recent_stress: Option<String>,

    // Previous treatment (both categories)
    pub prev_vet_visit: Option<String>,
    pub prev_tests: Option<String>,
    pub prev_treatments: Option<String>,
    pub prev_response: Option<String>,
}
