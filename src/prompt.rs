use crate::llm::ChatMessage;

/// System instruction prepended to every medical summary request. Category
/// and provider type are interpolated verbatim; absent values render empty.
pub fn medical_summary_system_message(category: &str, provider_type: &str) -> ChatMessage {
    let prompt = format!(
        "You are a medical AI assistant tasked with creating professional medical summaries.\n\
         Based on the conversation, extract patient information and format it as a concise medical summary.\n\
         Focus on key details related to the patient's symptoms, medical history, and current condition.\n\
         Consider the specific category ({category}) and provider type ({provider_type}) when creating this summary.\n\
         Your summary will be used by healthcare providers to quickly understand the patient's situation."
    );

    ChatMessage::system(prompt)
}
