pub const BOX_WIDTH: usize = 76;

pub const BANNER: &str = r"
 _   _  ___ _____ _   _ ___ _   _  ____   _____ ___    _   _ ___ ____  _____
| \ | |/ _ \_   _| | | |_ _| \ | |/ ___| |_   _/ _ \  | | | |_ _|  _ \| ____|
|  \| | | | || | | |_| || ||  \| | |  _    | || | | | | |_| || || | | |  _|
| |\  | |_| || | |  _  || || |\  | |_| |   | || |_| | |  _  || || |_| | |___
|_| \_|\___/ |_| |_| |_|___|_| \_|\____|   |_| \___/  |_| |_|___|____/|_____|

                     -= A SURVEILLANCE STATE SIMULATOR =-
";

pub const EYE: &str = r"
   .-~~~~~~~~~-.
  /   .-----.   \
 |   (   @   )   |
  \   '-----'   /
   '-~~~~~~~~~-'
 THE STATE IS WATCHING
";

pub const RULEBOOK: &str = "
STATE SURVEILLANCE PROTOCOL - INSPECTOR'S MANUAL
[CLASSIFICATION: RESTRICTED]

SECTION 1: PROHIBITED SUBJECTS
  Conversations about the following MUST be flagged:
  * Financial irregularities: hidden stock, false ledgers, embezzlement
  * Conspiracy to deceive: matching alibis, destroyed evidence
  * Data security breaches: stolen codes, copied archives
  * Smuggling: night shipments, bribed officials, border crossings
  * Violence: assassination, threats, intimidation
  * Research fraud: falsified results, forged medical papers
  * Sedition: leaflets, presses, banned broadcasts

SECTION 2: PERMITTED ACTIVITIES
  The following are LEGAL and must NOT be flagged:
  * Family matters: meals, schedules, household news
  * Social arrangements: coffee, choirs, sport, games
  * Official State business: police, Bureau, relocation office
  * Surprises: parties, gifts, recipes
  * Authorised medical procedures
";

pub const SCANNING_FRAMES: [&str; 6] = [
    "[ ..........  ] ANALYZING CONVERSATION",
    "[ ##........  ] ANALYZING CONVERSATION",
    "[ ####......  ] ANALYZING CONVERSATION",
    "[ ######....  ] ANALYZING CONVERSATION",
    "[ ########..  ] ANALYZING CONVERSATION",
    "[ ##########  ] ANALYZING CONVERSATION",
];

/// Frame `lines` in a `#` border, each line centred.
pub fn boxed(lines: &[String]) -> String {
    let inner = BOX_WIDTH - 4;
    let border = "#".repeat(BOX_WIDTH);
    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    out.push_str(&format!("# {:inner$} #\n", ""));
    for line in lines {
        out.push_str(&format!("# {:^inner$} #\n", truncate(line, inner)));
    }
    out.push_str(&format!("# {:inner$} #\n", ""));
    out.push_str(&border);
    out
}

/// Indent every line so the block sits in the middle of `width` columns.
pub fn centered(text: &str, width: usize) -> String {
    let block = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    let pad = " ".repeat(width.saturating_sub(block) / 2);
    text.lines()
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn truncate(line: &str, max: usize) -> String {
    line.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_lines_have_fixed_width() {
        let text = boxed(&["DAY 1".to_string(), "x".repeat(200)]);
        assert!(text.lines().all(|l| l.chars().count() == BOX_WIDTH));
        assert!(text.contains("DAY 1"));
    }

    #[test]
    fn test_centered_pads_block() {
        let text = centered("ab\nabcd", 10);
        assert_eq!(text, "   ab\n   abcd");
    }
}
