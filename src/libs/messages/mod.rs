pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_render_their_parameters() {
        assert_eq!(Message::TaskNotFound(7).to_string(), "Task #7 not found");
        assert_eq!(Message::TaskCreated(3, "Review".into()).to_string(), "Task #3 'Review' created");
        assert!(Message::CheckpointFailed("busy".into()).to_string().ends_with("next tick: busy"));
    }
}
