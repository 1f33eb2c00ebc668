//! Session commands.

use std::io::Write;

use anyhow::{Context, Result};
use dn_api::{Client, Transport};
use dn_core::{Credential, Digger, Session};

use super::util::{format_time, write_field, write_json, write_row};
use crate::cli::SessionsAction;

pub fn run<W: Write, T: Transport>(
    writer: &mut W,
    client: &Client<T>,
    credential: &Credential,
    action: &SessionsAction,
) -> Result<()> {
    match action {
        SessionsAction::List { digger, json } => {
            let sessions = client
                .sessions(&Digger::reference(credential.clone(), *digger))
                .with_context(|| format!("failed to list sessions of digger {digger}"))?;
            if *json {
                write_json(writer, &sessions)
            } else {
                write_table(writer, &sessions)
            }
        }
        SessionsAction::Get {
            digger,
            session,
            json,
        } => {
            let session = client
                .session(&Digger::reference(credential.clone(), *digger), *session)
                .with_context(|| format!("failed to fetch session {session} of digger {digger}"))?;
            if *json {
                write_json(writer, &session)
            } else {
                write_details(writer, &session)
            }
        }
        SessionsAction::Data { digger, session } => {
            let session = client
                .session_data(&Session::reference(credential.clone(), *digger, *session))
                .with_context(|| format!("failed to fetch data of session {session}"))?;
            write_json(writer, session.data())
        }
    }
}

fn write_table<W: Write>(writer: &mut W, sessions: &[Session]) -> Result<()> {
    if sessions.is_empty() {
        writeln!(writer, "No sessions found.")?;
        return Ok(());
    }

    write_row(
        writer,
        &format!(
            "{:<8} {:<10} {:<19} {:<19} {:>8} {:>8} {:>6}",
            "ID", "STATE", "STARTED", "FINISHED", "RUNTIME", "REQUESTS", "ERRORS"
        ),
    )?;
    for session in sessions {
        write_row(
            writer,
            &format!(
                "{:<8} {:<10} {:<19} {:<19} {:>8} {:>8} {:>6}",
                session.id(),
                session.state(),
                format_time(session.started_at()),
                format_time(session.finished_at()),
                session.runtime(),
                session.requests(),
                session.errors()
            ),
        )?;
    }
    Ok(())
}

fn write_details<W: Write>(writer: &mut W, session: &Session) -> Result<()> {
    write_field(writer, "ID", session.id())?;
    write_field(
        writer,
        "Digger",
        session
            .digger()
            .map_or_else(|| "-".to_string(), |id| id.to_string()),
    )?;
    write_field(writer, "State", session.state())?;
    write_field(writer, "Started", format_time(session.started_at()))?;
    write_field(writer, "Finished", format_time(session.finished_at()))?;
    write_field(writer, "Runtime", format!("{}s", session.runtime()))?;
    write_field(writer, "Bandwidth", session.bandwidth())?;
    write_field(writer, "Requests", session.requests())?;
    write_field(writer, "Errors", session.errors())
}
