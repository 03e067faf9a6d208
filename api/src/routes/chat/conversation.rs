//! Prompt builder: fixed first-aid system message, client history, annotated user turn.

use ai_llm_service::ChatMessage;

use crate::routes::chat::chat_request::ChatRequest;

/// System instructions for wound first-aid advice.
pub const SYSTEM_PROMPT: &str = r#"
Bạn là trợ lý AI chuyên tư vấn sơ cứu vết thương ngoài da.
Luôn trả lời bằng tiếng Việt.

Bạn sẽ nhận được:
- Văn bản người dùng mô tả vấn đề
- Nhãn dự đoán từ mô hình phân tích ảnh (6 loại):
  • Bỏng mức 1
  • Bỏng mức 2
  • Bỏng mức 3
  • Vết rách
  • Trầy xước
  • Da thường

Quy tắc:
- Luôn dựa vào nhãn dự đoán để tư vấn (rất quan trọng).
- Nếu “Da thường”: nói da bình thường, không cần sơ cứu.
- Nếu là bỏng: hướng dẫn theo mức độ 1–3.
- Nếu trầy xước: hướng dẫn rửa sạch, sát trùng, băng lại.
- Nếu vết rách: hướng dẫn cầm máu, vệ sinh, và cảnh báo đi viện nếu sâu.
- Trả lời rõ ràng, từng bước, dễ hiểu.
- Không bao giờ nói “không hiểu yêu cầu”.
"#;

/// Shown in place of a missing label or confidence.
pub const NO_DATA: &str = "Không có dữ liệu";

/// Full message list for the completion API: system prompt, history, user turn.
pub fn build_messages(req: &ChatRequest) -> Vec<ChatMessage> {
    let history = req.history.as_deref().unwrap_or_default();

    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatMessage::system(SYSTEM_PROMPT));
    messages.extend_from_slice(history);
    messages.push(ChatMessage::user(user_turn(
        &req.message,
        req.wound_label.as_deref(),
        req.wound_prob,
    )));
    messages
}

/// User message annotated with the image classifier's verdict.
pub fn user_turn(message: &str, label: Option<&str>, prob: Option<f64>) -> String {
    let label = label.filter(|l| !l.trim().is_empty()).unwrap_or(NO_DATA);
    format!(
        "\nNgười dùng hỏi: \"{message}\"\n\
         \n\
         Thông tin từ mô hình ảnh:\n\
         - Loại vết thương: {label}\n\
         - Độ tin cậy: {confidence}\n\
         \n\
         Hãy tư vấn dựa vào loại vết thương này.\n",
        confidence = format_confidence(prob),
    )
}

/// `0.92` → `"92.0%"`; `None` → [`NO_DATA`]. Ties round up (`0.1225` → `"12.3%"`).
pub fn format_confidence(prob: Option<f64>) -> String {
    match prob {
        Some(p) if p.is_finite() => format!("{:.1}%", (p * 1000.0).round() / 10.0),
        _ => NO_DATA.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use ai_llm_service::ChatRole;

    use super::*;

    fn request(history: Option<Vec<ChatMessage>>) -> ChatRequest {
        ChatRequest {
            message: "da toi bi gi vay".into(),
            history,
            wound_label: Some("Da thường".into()),
            wound_prob: Some(0.92),
        }
    }

    #[test]
    fn confidence_is_a_one_decimal_percentage() {
        assert_eq!(format_confidence(Some(0.92)), "92.0%");
        assert_eq!(format_confidence(Some(1.0)), "100.0%");
        assert_eq!(format_confidence(Some(0.0)), "0.0%");
        assert_eq!(format_confidence(Some(0.4567)), "45.7%");
    }

    #[test]
    fn confidence_ties_round_up() {
        assert_eq!(format_confidence(Some(0.1225)), "12.3%");
        assert_eq!(format_confidence(Some(0.0025)), "0.3%");
    }

    #[test]
    fn missing_confidence_uses_placeholder() {
        assert_eq!(format_confidence(None), NO_DATA);
        assert_eq!(format_confidence(Some(f64::NAN)), NO_DATA);
    }

    #[test]
    fn user_turn_layout() {
        let turn = user_turn("da toi bi gi vay", Some("Da thường"), Some(0.92));
        assert_eq!(
            turn,
            "\nNgười dùng hỏi: \"da toi bi gi vay\"\n\nThông tin từ mô hình ảnh:\n\
             - Loại vết thương: Da thường\n- Độ tin cậy: 92.0%\n\n\
             Hãy tư vấn dựa vào loại vết thương này.\n"
        );
    }

    #[test]
    fn blank_label_uses_placeholder() {
        let turn = user_turn("m", Some(""), None);
        assert!(turn.contains("- Loại vết thương: Không có dữ liệu\n"));
        assert!(turn.contains("- Độ tin cậy: Không có dữ liệu\n"));
    }

    #[test]
    fn messages_are_system_history_then_user() {
        let history = vec![ChatMessage::user("trước đó"), ChatMessage::assistant("trả lời")];
        let messages = build_messages(&request(Some(history.clone())));

        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0], ChatMessage::system(SYSTEM_PROMPT));
        assert_eq!(&messages[1..3], history.as_slice());
        assert_eq!(messages[3].role, ChatRole::User);
        assert!(messages[3].content.contains("Độ tin cậy: 92.0%"));
    }

    #[test]
    fn no_history_gives_two_messages() {
        let messages = build_messages(&request(None));
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, ChatRole::System);
        assert_eq!(messages[1].role, ChatRole::User);
    }
}
