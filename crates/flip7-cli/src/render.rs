use std::io::{self, Write};

use flip7_core::game::session::Session;

/// The per-invocation report: deck header, stats table, hand, danger and
/// advice, plus the top numeric draws when asked for.
pub fn report(
    out: &mut impl Write,
    session: &Session,
    notice: Option<&str>,
    top_draws: Option<usize>,
) -> io::Result<()> {
    if let Some(notice) = notice {
        writeln!(out, "{notice}")?;
        writeln!(out)?;
    }

    writeln!(
        out,
        "left {} / {}",
        session.total_remaining(),
        session.initial_total()
    )?;
    writeln!(out)?;
    writeln!(out, "{:<14}{:>6}{:>10}", "card", "left", "chance")?;
    for stat in session.stats() {
        writeln!(
            out,
            "{:<14}{:>6}{:>9.2}%",
            stat.card.label(),
            stat.remaining,
            stat.chance_percent
        )?;
    }
    writeln!(out)?;
    writeln!(out, "hand: {}", hand_line(session))?;
    writeln!(
        out,
        "danger: {:.2}% chance the next draw doubles a held number",
        session.danger_percent()
    )?;
    writeln!(out, "advice: {}", session.recommendation().label())?;

    if let Some(k) = top_draws {
        writeln!(out)?;
        writeln!(out, "top draw chances:")?;
        let top = session.top_draws(k);
        if top.iter().all(|stat| stat.remaining == 0) {
            writeln!(out, "No numeric cards left in the deck.")?;
        } else {
            for stat in top {
                writeln!(out, "  {}: {:.2}%", stat.card.label(), stat.chance_percent)?;
            }
        }
    }

    Ok(())
}

fn hand_line(session: &Session) -> String {
    if session.hand().is_empty() {
        return "(empty)".to_string();
    }
    session
        .hand()
        .iter()
        .map(|card| card.label())
        .collect::<Vec<_>>()
        .join(" ")
}
