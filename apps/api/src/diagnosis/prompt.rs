//! Prompt builder: renders one symptom report into the single
//! natural-language prompt sent upstream.
//!
//! Pure and deterministic; the section order, field labels, and placeholder
//! policy are part of the contract with the generation model, so edits here
//! change answer quality, not just formatting. The owner's report is always
//! rendered in English; only the model's answer is translated.

use crate::diagnosis::form::FormData;
use crate::diagnosis::DiagnosisCategory;

/// Substituted for a missing, null, or empty scalar field.
const NOT_PROVIDED: &str = "Not provided";
/// Substituted for a missing or empty multi-select field.
const NOT_SPECIFIED: &str = "Not specified";

/// Language the model is asked to answer in. The report body stays English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Ko,
    Ja,
    Es,
}

impl Language {
    /// Unrecognized codes fall back to English rather than erroring.
    pub fn from_code(code: &str) -> Self {
        match code {
            "ko" => Language::Ko,
            "ja" => Language::Ja,
            "es" => Language::Es,
            _ => Language::En,
        }
    }

    /// Human-readable name embedded in the prompt's translation instruction.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ko => "Korean",
            Language::Ja => "Japanese",
            Language::Es => "Spanish",
        }
    }
}

/// Instructional header. Replace `{condition}` and `{language}` before use.
const PROMPT_HEADER: &str = r#"You are a veterinary assistant AI. Analyze the following pet owner's report based *only* on the information provided.
Your task is to suggest the top 3 most likely differential diagnoses (possible {condition}s) in descending order of likelihood.
For each suggested condition, provide the name of the condition. Include descriptions, reasoning, or treatment advice also.
Crucially, *before* the list, you *must* include a clear disclaimer stating this is an AI result, not a diagnosis, and a vet visit is essential.
**IMPORTANT: Provide the disclaimer and the list of disease names translated into {language}.**

Example Output Format (in {language}):
Disclaimer: [Disclaimer text in {language}]
1. [Condition Name One in {language}]
    a.**Description:** [Brief description in {language}]
    b.**General Approaches:** [List of general categories in {language}]
2. [Condition Name Two in {language}]
    a.**Description:** [Brief description in {language}]
    b.**General Approaches:** [List of general categories in {language}]
3. [Condition Name Three in {language}]
    a.**Description:** [Brief description in {language}]
    b.**General Approaches:** [List of general categories in {language}]

Below is the owner's report (provided in English):
--- Owner's Report Start ---
"#;

/// Closing instructions. Replace `{language}` before use.
const PROMPT_FOOTER: &str = r#"
--- Owner's Report End ---

Based *only* on the information provided above, provide the top 3 most likely differential diagnoses in the specified format (Disclaimer + numbered list of names only). **Remember to translate the output (disclaimer and disease names) into {language}.**"#;

/// Renders the complete prompt for one report.
///
/// Calling this twice with identical inputs yields byte-identical output.
pub fn build_prompt(form: &FormData, category: DiagnosisCategory, language: Language) -> String {
    let language_name = language.display_name();

    let header = PROMPT_HEADER
        .replace("{condition}", category.condition_label())
        .replace("{language}", language_name);
    let footer = PROMPT_FOOTER.replace("{language}", language_name);

    let mut body = basic_information(form);
    match category {
        DiagnosisCategory::Skin => body.push_str(&skin_report(form)),
        DiagnosisCategory::Digestive => body.push_str(&digestive_report(form)),
    }

    format!("{header}{body}{footer}")
}

/// `Not provided` for absent or blank scalar fields.
fn text(field: &Option<String>) -> &str {
    match field.as_deref() {
        Some(value) if !value.is_empty() => value,
        _ => NOT_PROVIDED,
    }
}

/// Multi-select fields join with `", "`; absent or empty becomes `Not specified`.
fn list(field: &Option<Vec<String>>) -> String {
    match field {
        Some(values) if !values.is_empty() => values.join(", "),
        _ => NOT_SPECIFIED.to_string(),
    }
}

fn basic_information(form: &FormData) -> String {
    format!(
        "\nBasic Information:\n\
         - Breed: {breed}\n\
         - Age: {age}\n\
         - Sex: {sex} (Neutered: {neutered})\n\
         - Weight Information: {weight_info}\n",
        breed = text(&form.breed),
        age = text(&form.age),
        sex = text(&form.sex),
        neutered = text(&form.neutered),
        weight_info = text(&form.weight_info),
    )
}

fn skin_report(form: &FormData) -> String {
    let mut report = format!(
        "\nMain Symptoms & History (Skin):\n\
         - Primary Problem: {main_complaint}\n\
         - First Noticed: {first_noticed}\n\
         - Onset Speed: {onset_speed}\n\
         - Initial Location: {initial_location}\n\
         - Has it spread?: {spread}\n\
         - Current Location(s): {current_location}\n\
         - Symmetrical?: {symmetry}\n\
         - Previous similar skin issues?: {previous_issues}\n\
         - Seasonal?: {seasonality}\n\
         - Overall progress?: {progress}\n",
        main_complaint = text(&form.main_complaint),
        first_noticed = text(&form.first_noticed),
        onset_speed = text(&form.onset_speed),
        initial_location = text(&form.initial_location),
        spread = text(&form.spread),
        current_location = text(&form.current_location),
        symmetry = text(&form.symmetry),
        previous_issues = text(&form.previous_issues),
        seasonality = text(&form.seasonality),
        progress = text(&form.progress),
    );

    report.push_str(&format!(
        "\nItchiness (Pruritus):\n\
         - Is the dog itchy?: {is_itchy}\n\
         - Itch Score (1-10): {pruritus_score}\n\
         - How dog shows itchiness: {itch_method}\n\
         - Main Itchy Location(s): {itch_location}\n\
         - Itch vs Lesion Onset: {itch_lesion_onset}\n\
         - Steroid Response: {steroid_response}\n\
         - Apoquel/Cytopoint Response: {apoquel_response}\n",
        is_itchy = text(&form.is_itchy),
        pruritus_score = text(&form.pruritus_score),
        itch_method = list(&form.itch_method),
        itch_location = text(&form.itch_location),
        itch_lesion_onset = text(&form.itch_lesion_onset),
        steroid_response = text(&form.steroid_response),
        apoquel_response = text(&form.apoquel_response),
    ));

    report.push_str(&format!(
        "\nLesion Characteristics:\n\
         - Observed Lesion Types: {lesion_types}\n\
         - Skin Texture: {skin_texture}\n\
         - Odor?: {odor}\n",
        lesion_types = list(&form.lesion_types),
        skin_texture = text(&form.skin_texture),
        odor = text(&form.odor),
    ));

    report.push_str(&format!(
        "\nEnvironment & Management:\n\
         - Living Area: {indoor_outdoor}\n\
         - Walk Environment: {walk_environment}\n\
         - Recent Env. Changes?: {env_changes}\n\
         - Grooming/Bathing Freq: {grooming_freq}\n\
         - Shampoo Used: {shampoo}\n\
         - Bedding Info: {bedding}\n\
         - Contact Irritants?: {contact_irritants}\n",
        indoor_outdoor = text(&form.indoor_outdoor),
        walk_environment = text(&form.walk_environment),
        env_changes = text(&form.env_changes),
        grooming_freq = text(&form.grooming_freq),
        shampoo = text(&form.shampoo),
        bedding = text(&form.bedding),
        contact_irritants = text(&form.contact_irritants),
    ));

    report.push_str(&format!(
        "\nDiet (Skin Context):\n\
         - Main Food: {main_food} (Since: {food_since})\n\
         - Treats/Other: {treats}\n\
         - Recent Diet Change?: {diet_change}\n\
         - Rx Diet Trial?: {rx_diet_trial}\n\
         - Concurrent GI Symptoms?: {gi_symptoms}\n",
        main_food = text(&form.main_food),
        food_since = text(&form.food_since),
        treats = text(&form.treats),
        diet_change = text(&form.diet_change),
        rx_diet_trial = text(&form.rx_diet_trial),
        gi_symptoms = text(&form.gi_symptoms),
    ));

    report.push_str(&format!(
        "\nParasite Control:\n\
         - Regular Ectoparasite Prevention?: {parasite_control_active}\n\
         - Product(s): {parasite_product}\n\
         - Frequency: {parasite_frequency}\n\
         - Last Dose: {parasite_last_date}\n\
         - Fleas/Ticks Seen?: {flea_tick_seen}\n",
        parasite_control_active = text(&form.parasite_control_active),
        parasite_product = text(&form.parasite_product),
        parasite_frequency = text(&form.parasite_frequency),
        parasite_last_date = text(&form.parasite_last_date),
        flea_tick_seen = text(&form.flea_tick_seen),
    ));

    report.push_str(&format!(
        "\nContagion:\n\
         - Other Pets Affected?: {other_pets_affected}\n\
         - Humans Affected (Skin)?: {humans_affected}\n",
        other_pets_affected = text(&form.other_pets_affected),
        humans_affected = text(&form.humans_affected),
    ));

    report.push_str(&format!(
        "\nGeneral Health:\n\
         - Other Symptoms Noted: {other_symptoms}\n\
         - Pre-existing Conditions: {preexisting_conditions}\n\
         - Current Medications: {current_meds}\n\
         - Vaccination Status: {vaccination_status}\n",
        other_symptoms = text(&form.other_symptoms),
        preexisting_conditions = text(&form.preexisting_conditions),
        current_meds = text(&form.current_meds),
        vaccination_status = text(&form.vaccination_status),
    ));

    report.push_str(&format!(
        "\nPrevious Treatment (Skin Issue):\n\
         - Previous Vet Visit?: {prev_vet_visit}\n\
         - Previous Tests: {prev_tests}\n\
         - Previous Treatments: {prev_treatments}\n\
         - Response to Treatment: {prev_response}\n",
        prev_vet_visit = text(&form.prev_vet_visit),
        prev_tests = text(&form.prev_tests),
        prev_treatments = text(&form.prev_treatments),
        prev_response = text(&form.prev_response),
    ));

    report
}

fn digestive_report(form: &FormData) -> String {
    let mut report = format!(
        "\nMain Symptoms & History (Digestive):\n\
         - Primary Problem: {main_complaint}\n\
         - First Noticed: {first_noticed}\n\
         - Onset Speed: {onset_speed}\n\
         - Symptom Pattern: {symptom_pattern}\n\
         - Overall progress?: {progress}\n\
         - Previous similar digestive issues?: {previous_issues}\n",
        main_complaint = text(&form.main_complaint),
        first_noticed = text(&form.first_noticed),
        onset_speed = text(&form.onset_speed),
        symptom_pattern = text(&form.symptom_pattern),
        progress = text(&form.progress),
        previous_issues = text(&form.previous_issues),
    );

    report.push_str(&format!(
        "\nDiet (Very Important):\n\
         - Main Food: {main_food} (Since: {food_since})\n\
         - Treats/Other: {treats}\n\
         - Recent Diet Change?: {diet_change}\n\
         - Eating Habits: {eating_habits}\n\
         - Scavenging?: {scavenging}\n\
         - Toy/Object Ingestion?: {toy_ingestion}\n\
         - Toxin Exposure?: {toxin_exposure}\n",
        main_food = text(&form.main_food),
        food_since = text(&form.food_since),
        treats = text(&form.treats),
        diet_change = text(&form.diet_change),
        eating_habits = text(&form.eating_habits),
        scavenging = text(&form.scavenging),
        toy_ingestion = text(&form.toy_ingestion),
        toxin_exposure = text(&form.toxin_exposure),
    ));

    report.push_str(&format!(
        "\nVomiting:\n\
         - Is the dog vomiting?: {is_vomiting}\n\
         - Vomit Frequency: {vomit_frequency}\n\
         - Vomit Timing: {vomit_timing}\n\
         - Vomit Contents: {vomit_contents}\n\
         - Effort Involved (Heaving)?: {vomit_effort}\n",
        is_vomiting = text(&form.is_vomiting),
        vomit_frequency = text(&form.vomit_frequency),
        vomit_timing = text(&form.vomit_timing),
        vomit_contents = list(&form.vomit_contents),
        vomit_effort = text(&form.vomit_effort),
    ));

    report.push_str(&format!(
        "\nDiarrhea:\n\
         - Does the dog have diarrhea?: {is_diarrhea}\n\
         - Diarrhea Frequency: {diarrhea_frequency}\n\
         - Diarrhea Consistency: {diarrhea_consistency}\n\
         - Straining to Defecate?: {diarrhea_straining}\n\
         - Accidents in House?: {diarrhea_accidents}\n\
         - Odor Unusually Foul?: {diarrhea_odor}\n",
        is_diarrhea = text(&form.is_diarrhea),
        diarrhea_frequency = text(&form.diarrhea_frequency),
        diarrhea_consistency = list(&form.diarrhea_consistency),
        diarrhea_straining = text(&form.diarrhea_straining),
        diarrhea_accidents = text(&form.diarrhea_accidents),
        diarrhea_odor = text(&form.diarrhea_odor),
    ));

    report.push_str(&format!(
        "\nAppetite & Thirst:\n\
         - Current Appetite?: {appetite}\n\
         - Water Intake?: {thirst}\n",
        appetite = text(&form.appetite),
        thirst = text(&form.thirst),
    ));

    report.push_str(&format!(
        "\nOther Digestive Symptoms:\n\
         - Loud Gut Sounds?: {borborygmi}\n\
         - Signs of Abdominal Pain?: {abdominal_pain}\n\
         - Increased Gas?: {flatulence}\n\
         - Lip Smacking/Drooling?: {lip_smacking_drooling}\n",
        borborygmi = text(&form.borborygmi),
        abdominal_pain = text(&form.abdominal_pain),
        flatulence = text(&form.flatulence),
        lip_smacking_drooling = text(&form.lip_smacking_drooling),
    ));

    report.push_str(&format!(
        "\nGeneral Condition:\n\
         - Lethargic?: {lethargy}\n\
         - Feverish?: {fever}\n\
         - Gum Color: {gum_color}\n",
        lethargy = text(&form.lethargy),
        fever = text(&form.fever),
        gum_color = text(&form.gum_color),
    ));

    report.push_str(&format!(
        "\nEnvironment & Management (Digestive Context):\n\
         - Deworming Status: {deworming_status}\n\
         - Vaccination Status (esp. Parvo): {vaccination_status}\n\
         - Recent Stress?: {recent_stress}\n\
         - Other Pets Affected (GI)?: {other_pets_affected}\n",
        deworming_status = text(&form.deworming_status),
        vaccination_status = text(&form.vaccination_status),
        recent_stress = text(&form.recent_stress),
        other_pets_affected = text(&form.other_pets_affected),
    ));

    report.push_str(&format!(
        "\nPrevious Treatment (Digestive Issue):\n\
         - Previous Vet Visit?: {prev_vet_visit}\n\
         - Previous Tests: {prev_tests}\n\
         - Previous Treatments: {prev_treatments}\n\
         - Response to Treatment: {prev_response}\n",
        prev_vet_visit = text(&form.prev_vet_visit),
        prev_tests = text(&form.prev_tests),
        prev_treatments = text(&form.prev_treatments),
        prev_response = text(&form.prev_response),
    ));

    report
}
