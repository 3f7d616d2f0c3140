//! Chat command - interactive question loop.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use tally::{RoleHint, Tally};

use super::load;
use crate::cli::Sources;
use crate::session::{ChatSession, Speaker};

pub fn run(
    tally: &Tally,
    sources: Sources,
    role: Option<RoleHint>,
) -> Result<(), Box<dyn std::error::Error>> {
    let tables = load(tally, &sources)?;
    let noun = role.unwrap_or_default().record_noun();

    let mut session = ChatSession::new(format!(
        "Hello! Ask me anything about your {}. Type /history, /clear or /quit.",
        noun
    ));
    print_turn_text(Speaker::Assistant, &session.turns()[0].content);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", ">".green().bold());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();

        match input {
            "" => continue,
            "/quit" | "/exit" => break,
            "/clear" => {
                session.clear();
                println!("{}", "History cleared.".dimmed());
                continue;
            }
            "/history" => {
                for turn in session.turns() {
                    print_turn_text(turn.role, &turn.content);
                }
                continue;
            }
            _ => {}
        }

        session.push_user(input);
        let answer = tally.respond(
            Some(&tables.primary),
            tables.secondary.as_ref(),
            input,
            role,
        );
        print_turn_text(Speaker::Assistant, &answer.text);
        session.push_assistant(answer.text);
    }

    Ok(())
}

fn print_turn_text(speaker: Speaker, text: &str) {
    let label = match speaker {
        Speaker::User => "you".cyan().bold(),
        Speaker::Assistant => "tally".magenta().bold(),
    };
    println!("{}: {}\n", label, text);
}
