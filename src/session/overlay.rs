//! Break lock-screen state machine.
//!
//! A `BreakOverlay` owns one break from start to finish. It counts down to a
//! fixed end timestamp, and it only ever ends through one of two user
//! actions: the bypass phrase (at any time) or the resume action (once the
//! countdown has run out). Running out of time changes what the user can do,
//! not whether the break is over; the overlay waits indefinitely.

use chrono::{DateTime, Duration, Local};

use crate::session::controller::BreakPlan;

/// The phrase that ends a break early. Compared verbatim, case-sensitive.
pub const BYPASS_PHRASE: &str = "iamdesparatetowork";

/// How long the "incorrect" notice stays up after a failed attempt.
const NOTICE_SECONDS: i64 = 1;

/// Phase of the break surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPhase {
    /// Counting down; resume is hidden.
    Counting,
    /// Countdown hit zero; resume is available. Entered automatically,
    /// never left automatically.
    Finished,
    /// A sanctioned exit happened; the surface is being torn down.
    Terminating,
}

/// Result of a bypass attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordOutcome {
    /// Phrase matched; the overlay is terminating.
    Accepted,
    /// Phrase did not match; input was cleared, phase unchanged.
    Rejected,
}

/// State for one break, created fresh per break and discarded afterwards.
#[derive(Debug, Clone)]
pub struct BreakOverlay {
    plan: BreakPlan,
    ends_at: DateTime<Local>,
    phase: OverlayPhase,
    input: String,
    notice_until: Option<DateTime<Local>>,
    completion_taken: bool,
}

impl BreakOverlay {
    /// Start a break now: enters Counting with the end timestamp fixed at
    /// `now + plan.seconds`.
    #[must_use]
    pub fn new(plan: BreakPlan, now: DateTime<Local>) -> Self {
        #[allow(clippy::cast_possible_wrap)]
        let ends_at = now + Duration::seconds(plan.seconds as i64);
        Self {
            plan,
            ends_at,
            phase: OverlayPhase::Counting,
            input: String::new(),
            notice_until: None,
            completion_taken: false,
        }
    }

    /// The break this overlay is enforcing.
    #[must_use]
    pub const fn plan(&self) -> BreakPlan {
        self.plan
    }

    /// True for a long break.
    #[must_use]
    pub const fn is_long(&self) -> bool {
        self.plan.is_long()
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> OverlayPhase {
        self.phase
    }

    /// Seconds left on the countdown, clamped at zero.
    #[must_use]
    pub fn remaining_seconds(&self, now: DateTime<Local>) -> u64 {
        let left = (self.ends_at - now).num_seconds();
        u64::try_from(left).unwrap_or(0)
    }

    /// Advance the clock. Flips Counting to Finished the moment the
    /// countdown reaches zero and retires an expired "incorrect" notice.
    /// Never terminates the break.
    pub fn tick(&mut self, now: DateTime<Local>) {
        if self.phase == OverlayPhase::Counting && self.remaining_seconds(now) == 0 {
            self.phase = OverlayPhase::Finished;
        }

        if let Some(until) = self.notice_until {
            if now >= until {
                self.notice_until = None;
            }
        }
    }

    /// The text currently typed into the password field.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Append a character to the password field.
    pub fn push_char(&mut self, c: char) {
        if self.phase != OverlayPhase::Terminating {
            self.input.push(c);
        }
    }

    /// Delete the last character of the password field.
    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Submit the password field against the bypass phrase.
    ///
    /// A match terminates the overlay from either Counting or Finished. A
    /// mismatch clears the field, raises the transient "incorrect" notice,
    /// and leaves the phase untouched.
    pub fn submit_password(&mut self, now: DateTime<Local>) -> PasswordOutcome {
        if self.phase == OverlayPhase::Terminating {
            return PasswordOutcome::Rejected;
        }

        if self.input == BYPASS_PHRASE {
            self.phase = OverlayPhase::Terminating;
            self.input.clear();
            self.notice_until = None;
            PasswordOutcome::Accepted
        } else {
            self.input.clear();
            self.notice_until = Some(now + Duration::seconds(NOTICE_SECONDS));
            PasswordOutcome::Rejected
        }
    }

    /// Activate the resume action. Only honored once Finished; returns
    /// whether the overlay is now terminating.
    pub fn resume(&mut self) -> bool {
        if self.phase == OverlayPhase::Finished {
            self.phase = OverlayPhase::Terminating;
            true
        } else {
            false
        }
    }

    /// True while the "incorrect" notice should be shown.
    #[must_use]
    pub fn notice_active(&self, now: DateTime<Local>) -> bool {
        self.notice_until.is_some_and(|until| now < until)
    }

    /// One-shot completion token.
    ///
    /// Returns true exactly once, after the overlay has entered Terminating.
    /// The driver uses this to fire the break-end transition exactly once.
    pub fn take_completion(&mut self) -> bool {
        if self.phase == OverlayPhase::Terminating && !self.completion_taken {
            self.completion_taken = true;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::controller::BreakKind;
    use chrono::TimeZone;

    fn start_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).single().unwrap()
    }

    fn overlay(seconds: u64) -> BreakOverlay {
        let plan = BreakPlan {
            seconds,
            kind: BreakKind::Short,
        };
        BreakOverlay::new(plan, start_time())
    }

    fn type_phrase(o: &mut BreakOverlay, phrase: &str) {
        for c in phrase.chars() {
            o.push_char(c);
        }
    }

    #[test]
    fn test_starts_counting() {
        let o = overlay(300);
        assert_eq!(o.phase(), OverlayPhase::Counting);
        assert_eq!(o.remaining_seconds(start_time()), 300);
    }

    #[test]
    fn test_remaining_clamps_at_zero() {
        let o = overlay(10);
        let much_later = start_time() + Duration::seconds(1000);
        assert_eq!(o.remaining_seconds(much_later), 0);
    }

    #[test]
    fn test_countdown_reaching_zero_enters_finished() {
        let mut o = overlay(10);

        let almost = start_time() + Duration::seconds(9);
        o.tick(almost);
        assert_eq!(o.phase(), OverlayPhase::Counting);

        let done = start_time() + Duration::seconds(10);
        o.tick(done);
        assert_eq!(o.phase(), OverlayPhase::Finished);
    }

    #[test]
    fn test_timeout_never_completes_the_break() {
        let mut o = overlay(10);

        // Ticks continue long past the end with no user action
        for extra in 10..10_000 {
            o.tick(start_time() + Duration::seconds(extra));
        }

        assert_eq!(o.phase(), OverlayPhase::Finished);
        assert!(!o.take_completion());
    }

    #[test]
    fn test_correct_password_during_counting() {
        let mut o = overlay(300);
        let now = start_time() + Duration::seconds(290);
        o.tick(now);
        assert_eq!(o.remaining_seconds(now), 10);

        type_phrase(&mut o, BYPASS_PHRASE);
        assert_eq!(o.submit_password(now), PasswordOutcome::Accepted);
        assert_eq!(o.phase(), OverlayPhase::Terminating);
        assert!(o.take_completion());
    }

    #[test]
    fn test_correct_password_after_finished() {
        let mut o = overlay(5);
        let now = start_time() + Duration::seconds(60);
        o.tick(now);
        assert_eq!(o.phase(), OverlayPhase::Finished);

        type_phrase(&mut o, BYPASS_PHRASE);
        assert_eq!(o.submit_password(now), PasswordOutcome::Accepted);
        assert_eq!(o.phase(), OverlayPhase::Terminating);
    }

    #[test]
    fn test_wrong_password_clears_input_and_keeps_phase() {
        let mut o = overlay(300);
        let now = start_time();

        type_phrase(&mut o, "letmeout");
        assert_eq!(o.submit_password(now), PasswordOutcome::Rejected);

        assert_eq!(o.input(), "");
        assert_eq!(o.phase(), OverlayPhase::Counting);
        assert!(!o.take_completion());
    }

    #[test]
    fn test_password_is_case_sensitive() {
        let mut o = overlay(300);
        type_phrase(&mut o, &BYPASS_PHRASE.to_uppercase());
        assert_eq!(
            o.submit_password(start_time()),
            PasswordOutcome::Rejected
        );
    }

    #[test]
    fn test_notice_shows_then_expires() {
        let mut o = overlay(300);
        let now = start_time();

        type_phrase(&mut o, "nope");
        o.submit_password(now);
        assert!(o.notice_active(now));

        let later = now + Duration::seconds(2);
        o.tick(later);
        assert!(!o.notice_active(later));
    }

    #[test]
    fn test_resume_hidden_while_counting() {
        let mut o = overlay(300);
        assert!(!o.resume());
        assert_eq!(o.phase(), OverlayPhase::Counting);
    }

    #[test]
    fn test_resume_after_finished() {
        let mut o = overlay(5);
        o.tick(start_time() + Duration::seconds(5));
        assert_eq!(o.phase(), OverlayPhase::Finished);

        assert!(o.resume());
        assert_eq!(o.phase(), OverlayPhase::Terminating);
    }

    #[test]
    fn test_completion_token_fires_exactly_once() {
        let mut o = overlay(5);
        o.tick(start_time() + Duration::seconds(5));
        o.resume();

        assert!(o.take_completion());
        assert!(!o.take_completion());
        assert!(!o.take_completion());
    }

    #[test]
    fn test_input_editing() {
        let mut o = overlay(300);
        o.push_char('a');
        o.push_char('b');
        o.backspace();
        assert_eq!(o.input(), "a");
    }

    #[test]
    fn test_no_input_after_terminating() {
        let mut o = overlay(5);
        o.tick(start_time() + Duration::seconds(5));
        o.resume();

        o.push_char('x');
        assert_eq!(o.input(), "");
    }
}
