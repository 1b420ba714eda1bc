//! Terminal front end: the [`Presentation`] the binary plays through.

mod art;
mod session;

pub use session::InputSession;

use std::thread;
use std::time::Duration;

use crossterm::event::KeyCode;
use log::info;
use rand::Rng;

use crate::config::GameConfig;
use crate::error::Result;
use crate::game::campaign::Campaign;
use crate::game::conversation::{Conversation, Question, Verdict};
use crate::game::outcome::{Ending, PerformanceTier};
use crate::game::presentation::{DaySummary, Presentation, Stage};

pub struct TerminalPresentation<'s> {
    session: &'s mut InputSession,
    text_delay: Duration,
    line_pause: Duration,
    /// Set once the player presses S; cleared when the next screen starts.
    skipping: bool,
    last_day: u32,
}

impl<'s> TerminalPresentation<'s> {
    pub fn new(session: &'s mut InputSession, config: &GameConfig) -> Self {
        Self {
            session,
            text_delay: config.text_delay,
            line_pause: config.line_pause,
            skipping: false,
            last_day: 0,
        }
    }

    // -----------------------------------------------------------------------
    // Drawing helpers
    // -----------------------------------------------------------------------

    fn new_screen(&mut self) -> Result<()> {
        self.skipping = false;
        self.session.clear()
    }

    fn print(&mut self, text: &str) -> Result<()> {
        let width = self.session.width();
        self.session.write(&art::centered(text, width))?;
        self.session.write("\n")
    }

    fn print_box(&mut self, lines: &[String]) -> Result<()> {
        self.print(&art::boxed(lines))
    }

    /// Typewriter output. Pressing S prints the rest of the screen at once.
    fn typewrite(&mut self, text: &str) -> Result<()> {
        for ch in text.chars() {
            if !self.skipping && self.session.skip_requested()? {
                self.skipping = true;
            }
            self.session.write_char(ch)?;
            if !self.skipping && !ch.is_whitespace() {
                thread::sleep(self.text_delay);
            }
        }
        self.session.write("\n")
    }

    fn pause(&mut self, duration: Duration) -> Result<()> {
        if !self.skipping && !self.session.skip_requested()? {
            thread::sleep(duration);
        } else {
            self.skipping = true;
        }
        Ok(())
    }

    fn wait_for_enter(&mut self, prompt: &str) -> Result<()> {
        self.print(&format!("\n>>> {prompt} <<<"))?;
        while self.session.read_key()? != KeyCode::Enter {}
        Ok(())
    }

    fn scanning(&mut self) -> Result<()> {
        for frame in art::SCANNING_FRAMES {
            if self.skipping {
                break;
            }
            self.session.clear()?;
            self.print_box(&[frame.to_string()])?;
            self.pause(Duration::from_millis(150))?;
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Screens outside the campaign
    // -----------------------------------------------------------------------

    pub fn title_screen(&mut self) -> Result<()> {
        loop {
            self.new_screen()?;
            self.print(art::BANNER)?;
            self.print(art::EYE)?;
            self.typewrite("  [SYSTEM] Welcome, Inspector. Your duty is to protect the State.")?;
            self.typewrite("  [SYSTEM] Analyze conversations. Detect deception. Report threats.")?;
            self.typewrite("  [HINT] Press S to skip animations.")?;
            self.print("\n>>> ENTER to begin | R for the rulebook <<<")?;

            match self.session.read_key()? {
                KeyCode::Char('r' | 'R') => self.show_rulebook()?,
                KeyCode::Enter => return Ok(()),
                _ => {}
            }
        }
    }

    /// Returns `true` to play again.
    pub fn prompt_restart(&mut self) -> Result<bool> {
        self.print("\n  [R] Restart    [Q] Quit")?;
        loop {
            match self.session.read_key()? {
                KeyCode::Char('r' | 'R') => return Ok(true),
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => return Ok(false),
                _ => self.print("  Press R to restart or Q to quit.")?,
            }
        }
    }
}

impl Presentation for TerminalPresentation<'_> {
    fn announce(&mut self, stage: Stage) -> Result<()> {
        self.new_screen()?;
        let lines = match stage {
            Stage::Shift(day) => {
                self.last_day = day;
                vec![format!("DAY {day}"), "Beginning surveillance shift...".to_string()]
            }
            Stage::Investigation => vec![
                format!("DAY {}", self.last_day + 1),
                "You are summoned to the Director's office.".to_string(),
                "The Bureau has questions about your work.".to_string(),
            ],
            Stage::Revelation => vec![
                format!("DAY {}", self.last_day + 2),
                "A sealed folder is waiting on your desk.".to_string(),
                "Nobody else was meant to hear these recordings.".to_string(),
            ],
        };
        self.print_box(&lines)?;
        self.wait_for_enter("Press ENTER to begin")
    }

    fn present_conversation(&mut self, conversation: &Conversation) -> Result<()> {
        self.new_screen()?;
        self.print_box(&[
            format!("INTERCEPTED CONVERSATION #{}", conversation.id),
            format!("PARTICIPANTS: {}", conversation.participants.join(", ")),
        ])?;
        self.session.write("\n")?;
        for line in &conversation.lines {
            self.pause(self.line_pause)?;
            self.typewrite(&format!("    {}: {}", line.speaker, line.text))?;
        }
        self.session.write("\n")
    }

    fn present_revelation(&mut self, conversation: &Conversation) -> Result<()> {
        self.present_conversation(conversation)?;
        self.wait_for_enter("Press ENTER to continue")
    }

    fn request_verdict(&mut self) -> Result<Verdict> {
        self.print_box(&[
            "YOUR ASSESSMENT, INSPECTOR?".to_string(),
            String::new(),
            "[1] SUSPICIOUS - Flag for investigation".to_string(),
            "[2] CLEAR - No threats detected        ".to_string(),
            "[R] VIEW RULEBOOK                      ".to_string(),
        ])?;
        loop {
            match self.session.read_key()? {
                KeyCode::Char('1') => return Ok(Verdict::Suspicious),
                KeyCode::Char('2') => return Ok(Verdict::Clear),
                KeyCode::Char('r' | 'R') => return Ok(Verdict::ShowRulebook),
                _ => self.print("Invalid input. Press 1, 2, or R.")?,
            }
        }
    }

    fn show_rulebook(&mut self) -> Result<()> {
        self.new_screen()?;
        self.print(art::RULEBOOK)?;
        self.wait_for_enter("Press ENTER to close the manual")
    }

    fn acknowledge_judgment(&mut self, flagged: bool) -> Result<()> {
        self.skipping = false;
        self.scanning()?;
        self.session.clear()?;
        let action = if flagged {
            "Case flagged for investigation."
        } else {
            "Citizens cleared. No further action."
        };
        self.print_box(&[">>> JUDGMENT RECORDED <<<".to_string(), action.to_string()])?;
        self.wait_for_enter("Press ENTER to continue")
    }

    fn request_quiz_answer(&mut self, question: &Question) -> Result<usize> {
        self.new_screen()?;
        self.print_box(&["LOYALTY REVIEW".to_string(), "Director Hale is taking notes.".to_string()])?;
        self.session.write("\n")?;
        self.typewrite(&format!("  {}", question.prompt))?;
        for (i, option) in question.options.iter().enumerate() {
            self.print(&format!("  [{}] {option}", i + 1))?;
        }
        loop {
            if let KeyCode::Char(c) = self.session.read_key()? {
                if let Some(index) = c.to_digit(10).and_then(|d| (d as usize).checked_sub(1)) {
                    if index < question.options.len() {
                        return Ok(index);
                    }
                }
            }
            self.print(&format!("Press a number from 1 to {}.", question.options.len()))?;
        }
    }

    fn request_final_choice(&mut self) -> Result<bool> {
        self.new_screen()?;
        self.print(art::EYE)?;
        self.typewrite("  You know what the State hides. The transmitter is one street away.")?;
        self.typewrite("  Share the truth with everyone? [Y] Yes    [N] No")?;
        loop {
            match self.session.read_key()? {
                KeyCode::Char('y' | 'Y') => return Ok(true),
                KeyCode::Char('n' | 'N') => return Ok(false),
                _ => self.print("Press Y or N.")?,
            }
        }
    }

    fn report_day_summary(&mut self, summary: &DaySummary) -> Result<()> {
        self.new_screen()?;
        self.print(art::EYE)?;
        self.print_box(&[
            format!("DAY {} - SHIFT COMPLETE", summary.day),
            String::new(),
            format!("Conversations Monitored: {}", summary.total),
            format!("Cases Flagged: {}", summary.flagged),
            format!("Cases Cleared: {}", summary.cleared()),
            String::new(),
            "Report submitted to State Security.".to_string(),
        ])?;
        self.wait_for_enter("Press ENTER to continue")
    }

    fn report_final_outcome(&mut self, ending: &Ending) -> Result<()> {
        self.new_screen()?;
        match ending {
            Ending::Normal {
                tier,
                score,
                total,
                days,
            } => {
                let (verdict, remark) = match tier {
                    PerformanceTier::Exemplary => (
                        ">>> EXEMPLARY SERVICE <<<",
                        "The State commends your unwavering loyalty.",
                    ),
                    PerformanceTier::Adequate => (
                        ">>> ADEQUATE PERFORMANCE <<<",
                        "Remain vigilant. The State is watching.",
                    ),
                    PerformanceTier::Concerning => (
                        ">>> CONCERNING LAPSES DETECTED <<<",
                        "Mandatory retraining assigned.",
                    ),
                };
                self.print_box(&[
                    "END OF WORK CYCLE - PERFORMANCE EVALUATION".to_string(),
                    String::new(),
                    format!("Total Days Worked: {days}"),
                    format!("Total Conversations Analyzed: {total}"),
                    format!("Correct Judgments: {score}"),
                    String::new(),
                    verdict.to_string(),
                    remark.to_string(),
                ])?;
                self.typewrite("\n      ...But who watches the watchers?")?;
                self.typewrite("      ...And what do they hide?")?;
            }
            Ending::Caught {
                quiz_score,
                questions,
            } => {
                self.print_box(&[
                    ">>> LOYALTY REVIEW FAILED <<<".to_string(),
                    format!("Acceptable answers: {quiz_score} of {questions}"),
                    String::new(),
                    "Two officers are waiting outside your office.".to_string(),
                    "Your desk is reassigned by morning.".to_string(),
                ])?;
                self.typewrite("\n      Somewhere, an Inspector is listening to your last phone call.")?;
            }
            Ending::Good => {
                self.print_box(&[
                    ">>> THE LIGHT STAYS ON <<<".to_string(),
                    String::new(),
                    "At dawn every radio in the country plays the Minister's voice.".to_string(),
                    "By noon the listening stations stand empty.".to_string(),
                ])?;
                self.typewrite("\n      For the first time, nobody is watching.")?;
            }
            Ending::Silence => {
                self.print_box(&[
                    ">>> NOTHING TO HIDE <<<".to_string(),
                    String::new(),
                    "You return the folder and report for your next shift.".to_string(),
                    "Twelve flags a week. You make your quota.".to_string(),
                ])?;
                self.typewrite("\n      The State is watching. So are you.")?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Public entry point: runs campaigns until the player quits
// ---------------------------------------------------------------------------

pub fn run<R: Rng + ?Sized>(
    session: &mut InputSession,
    campaign: &Campaign,
    config: &GameConfig,
    rng: &mut R,
) -> Result<()> {
    let mut screen = TerminalPresentation::new(session, config);
    loop {
        screen.title_screen()?;

        let ending = crate::game::run(campaign, &mut screen, &mut *rng)?;
        info!("Run finished with {:?}", ending.kind());

        if !screen.prompt_restart()? {
            break;
        }
        info!("Player chose to restart");
    }
    Ok(())
}
