//! Prompt/message assembly for the completion call.

use docubuddy_core::config::IdentityConfig;
use docubuddy_core::types::Message;

/// Build the message set for a matched section: the fixed system instruction,
/// a second system message carrying the section as grounding context, and the
/// verbatim user question.
pub fn build_messages(identity: &IdentityConfig, context: &str, question: &str) -> Vec<Message> {
    vec![
        Message::system(&identity.system_prompt),
        Message::system(format!("Internal Documentation:\n{context}")),
        Message::user(question),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use docubuddy_core::types::Role;

    #[test]
    fn test_message_order_and_roles() {
        let identity = IdentityConfig::default();
        let messages = build_messages(
            &identity,
            "Title: Leave Policy\nEmployees get 20 days leave.",
            "how many leave days do I get?",
        );

        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].role, Role::System);
        assert!(messages[0].content.contains("DocuBuddy"));
        assert!(messages[0].content.contains("Dear employee"));

        assert_eq!(messages[1].role, Role::System);
        assert!(messages[1].content.starts_with("Internal Documentation:\n"));
        assert!(messages[1].content.contains("Title: Leave Policy"));

        assert_eq!(messages[2].role, Role::User);
        assert_eq!(messages[2].content, "how many leave days do I get?");
    }
}
