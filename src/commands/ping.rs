pub const TRIGGER: &str = "+ping";
pub const REPLY: &str = "Pong !";

/// Returns the reply for a message body, or `None` when the body is not the
/// trigger. The match is byte-exact: case, whitespace, and trailing
/// characters all count.
pub fn reply_for(content: &str) -> Option<&'static str> {
    (content == TRIGGER).then_some(REPLY)
}
