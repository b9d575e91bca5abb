//! Extractors for Device lock Commands
use crate::command::{Line, Resp};
use crate::status::Sim;

/// 9.1 Enter PIN +CPIN
///
/// A missing SIM is only reported through the error result code, so the
/// terminating `+CME ERROR` line is inspected as well.
pub fn pin_status(line: &Line, sim: &mut Sim) -> Resp {
    if let Some(mut args) = line.response("+CPIN") {
        match args.string() {
            Some("READY") => *sim = Sim::Ready,
            Some(_) => *sim = Sim::Pin,
            None => {}
        }
    } else if let Some(mut args) = line.response("+CME ERROR") {
        match args.string() {
            Some("SIM not inserted") | Some("10") => *sim = Sim::Missing,
            _ => {}
        }
    }
    Resp::Wait
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::LineType;

    #[test]
    fn ready_and_pin() {
        let mut sim = Sim::Unknown;
        pin_status(&Line::new(LineType::Plus, b"\r\n+CPIN: SIM PIN\r\n"), &mut sim);
        assert_eq!(sim, Sim::Pin);
        pin_status(&Line::new(LineType::Plus, b"\r\n+CPIN: READY\r\n"), &mut sim);
        assert_eq!(sim, Sim::Ready);
    }

    #[test]
    fn missing_sim() {
        let mut sim = Sim::Unknown;
        pin_status(
            &Line::new(LineType::Error, b"\r\n+CME ERROR: SIM not inserted\r\n"),
            &mut sim,
        );
        assert_eq!(sim, Sim::Missing);

        let mut sim = Sim::Unknown;
        pin_status(&Line::new(LineType::Error, b"\r\n+CME ERROR: 10\r\n"), &mut sim);
        assert_eq!(sim, Sim::Missing);
    }

    #[test]
    fn unrelated_error_leaves_state() {
        let mut sim = Sim::Unknown;
        pin_status(&Line::new(LineType::Error, b"\r\nERROR\r\n"), &mut sim);
        assert_eq!(sim, Sim::Unknown);
    }
}
