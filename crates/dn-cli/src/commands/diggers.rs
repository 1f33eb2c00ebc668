//! Digger commands.

use std::io::Write;

use anyhow::{Context, Result, bail};
use dn_api::{Client, Transport};
use dn_core::{Credential, Digger, DiggerChanges, Project};

use super::util::{format_time, parse_timestamp, write_field, write_json, write_row};
use crate::cli::{DiggerFieldArgs, DiggersAction};

pub fn run<W: Write, T: Transport>(
    writer: &mut W,
    client: &Client<T>,
    credential: &Credential,
    action: &DiggersAction,
) -> Result<()> {
    match action {
        DiggersAction::List { project, json } => {
            let diggers = client
                .diggers(&Project::reference(credential.clone(), *project))
                .with_context(|| format!("failed to list diggers of project {project}"))?;
            if *json {
                write_json(writer, &diggers)
            } else {
                write_table(writer, &diggers)
            }
        }
        DiggersAction::Get { id, json } => {
            let digger = client
                .digger(credential, *id)
                .with_context(|| format!("failed to fetch digger {id}"))?;
            if *json {
                write_json(writer, &digger)
            } else {
                write_details(writer, &digger)
            }
        }
        DiggersAction::Create { project, fields } => {
            let changes = changes_from_args(fields)?;
            let digger = client
                .create_digger(&Project::reference(credential.clone(), *project), changes)
                .with_context(|| format!("failed to create digger in project {project}"))?;
            writeln!(writer, "Created digger {}", digger.id())?;
            Ok(())
        }
        DiggersAction::Update {
            id,
            fields,
            replace,
        } => {
            let changes = changes_from_args(fields)?;
            if changes.is_empty() {
                bail!(
                    "nothing to update: pass at least one of --name, --url, --scraper-config, --schedule-from, --schedule-to"
                );
            }

            let updated = if *replace {
                let mut digger = client
                    .digger(credential, *id)
                    .with_context(|| format!("failed to fetch digger {id}"))?;
                changes.apply(&mut digger);
                client.replace_digger(&digger)
            } else {
                client.merge_digger(&Digger::reference(credential.clone(), *id), changes)
            }
            .with_context(|| format!("failed to update digger {id}"))?;

            write_details(writer, &updated)
        }
        DiggersAction::Delete { id } => {
            client
                .delete_digger(&Digger::reference(credential.clone(), *id))
                .with_context(|| format!("failed to delete digger {id}"))?;
            writeln!(writer, "Deleted digger {id}")?;
            Ok(())
        }
    }
}

fn changes_from_args(args: &DiggerFieldArgs) -> Result<DiggerChanges> {
    let mut changes = DiggerChanges::new();
    if let Some(name) = &args.name {
        changes = changes.name(name);
    }
    if let Some(url) = &args.url {
        changes = changes.url(url);
    }
    if let Some(config) = &args.scraper_config {
        changes = changes.config(config);
    }
    if let Some(from) = &args.schedule_from {
        changes = changes.schedule_from(parse_timestamp(from, "schedule-from")?);
    }
    if let Some(to) = &args.schedule_to {
        changes = changes.schedule_to(parse_timestamp(to, "schedule-to")?);
    }
    Ok(changes)
}

fn write_table<W: Write>(writer: &mut W, diggers: &[Digger]) -> Result<()> {
    if diggers.is_empty() {
        writeln!(writer, "No diggers found.")?;
        return Ok(());
    }

    write_row(
        writer,
        &format!("{:<8} {:<24} {:<10} URL", "ID", "NAME", "STATUS"),
    )?;
    for digger in diggers {
        write_row(
            writer,
            &format!(
                "{:<8} {:<24} {:<10} {}",
                digger.id(),
                digger.name(),
                digger.status(),
                digger.url()
            ),
        )?;
    }
    Ok(())
}

fn write_details<W: Write>(writer: &mut W, digger: &Digger) -> Result<()> {
    write_field(writer, "ID", digger.id())?;
    write_field(
        writer,
        "Project",
        digger
            .project()
            .map_or_else(|| "-".to_string(), |id| id.to_string()),
    )?;
    write_field(writer, "Name", digger.name())?;
    write_field(writer, "URL", digger.url())?;
    write_field(writer, "Status", digger.status())?;
    write_field(
        writer,
        "Schedule",
        format!(
            "{} .. {}",
            format_time(digger.schedule_from()),
            format_time(digger.schedule_to())
        ),
    )?;
    write_field(writer, "Bandwidth", digger.bandwidth())?;
    write_field(writer, "Calls", digger.calls())?;
    write_field(writer, "Requests", digger.requests())?;
    write_field(
        writer,
        "Last session",
        digger
            .last_session()
            .map_or_else(|| "-".to_string(), |id| id.to_string()),
    )?;
    write_field(writer, "Config", digger.config())
}

#[cfg(test)]
mod tests {
    use super::*;

    use dn_api::Method;
    use insta::assert_snapshot;

    use crate::commands::testing::{BASE_URL, client, credential, output};

    const DIGGER: &str = r#"{
        "id": 7,
        "project": 42,
        "name": "Prices",
        "url": "https://shop.example",
        "config": "do: []",
        "status": "active",
        "schedule_from": "2026-01-15T10:30:00Z",
        "schedule_to": null,
        "bandwidth": 1024,
        "calls": 3,
        "requests": 120,
        "last_session": 900
    }"#;

    #[test]
    fn get_renders_details() {
        let client = client(&[(200, DIGGER)]);
        let mut out = Vec::new();
        run(
            &mut out,
            &client,
            &credential(),
            &DiggersAction::Get { id: 7, json: false },
        )
        .unwrap();

        assert_snapshot!(output(out), @r"
ID:           7
Project:      42
Name:         Prices
URL:          https://shop.example
Status:       active
Schedule:     2026-01-15 10:30:00 .. -
Bandwidth:    1024
Calls:        3
Requests:     120
Last session: 900
Config:       do: []
");
    }

    #[test]
    fn list_uses_project_path() {
        let body = format!("[{DIGGER}]");
        let client = client(&[(200, body.as_str())]);
        let mut out = Vec::new();
        run(
            &mut out,
            &client,
            &credential(),
            &DiggersAction::List {
                project: 42,
                json: false,
            },
        )
        .unwrap();

        let requests = client.transport().requests();
        assert_eq!(requests[0].url(), format!("{BASE_URL}/projects/42/diggers"));
        assert_snapshot!(output(out), @r"
ID       NAME                     STATUS     URL
7        Prices                   active     https://shop.example
");
    }

    #[test]
    fn create_sends_parent_and_schedule() {
        let client = client(&[(201, DIGGER)]);
        let mut out = Vec::new();
        run(
            &mut out,
            &client,
            &credential(),
            &DiggersAction::Create {
                project: 42,
                fields: DiggerFieldArgs {
                    name: Some("Prices".to_string()),
                    schedule_from: Some("2026-01-15 10:30:00".to_string()),
                    ..DiggerFieldArgs::default()
                },
            },
        )
        .unwrap();

        let requests = client.transport().requests();
        assert_eq!(requests[0].method(), &Method::POST);
        assert_eq!(requests[0].url(), format!("{BASE_URL}/diggers/"));
        assert_eq!(
            requests[0].body_json().unwrap(),
            serde_json::json!({
                "name": "Prices",
                "schedule_from": "2026-01-15T10:30:00Z",
                "project": 42
            })
        );
        assert_eq!(output(out), "Created digger 7\n");
    }

    #[test]
    fn invalid_schedule_is_rejected_before_sending() {
        let client = client(&[]);
        let err = run(
            &mut Vec::new(),
            &client,
            &credential(),
            &DiggersAction::Update {
                id: 7,
                fields: DiggerFieldArgs {
                    schedule_to: Some("tomorrow".to_string()),
                    ..DiggerFieldArgs::default()
                },
                replace: false,
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("--schedule-to"));
        assert!(client.transport().requests().is_empty());
    }

    #[test]
    fn replace_sends_fetched_fields_back() {
        let client = client(&[(200, DIGGER), (200, DIGGER)]);
        run(
            &mut Vec::new(),
            &client,
            &credential(),
            &DiggersAction::Update {
                id: 7,
                fields: DiggerFieldArgs {
                    url: Some("https://other.example".to_string()),
                    ..DiggerFieldArgs::default()
                },
                replace: true,
            },
        )
        .unwrap();

        let requests = client.transport().requests();
        assert_eq!(requests[1].method(), &Method::PUT);
        let body = requests[1].body_json().unwrap();
        assert_eq!(body["url"], "https://other.example");
        assert_eq!(body["name"], "Prices");
        assert_eq!(body["project"], 42);
        assert!(body.get("bandwidth").is_none());
    }

    #[test]
    fn delete_targets_digger_path() {
        let client = client(&[(204, "")]);
        let mut out = Vec::new();
        run(
            &mut out,
            &client,
            &credential(),
            &DiggersAction::Delete { id: 7 },
        )
        .unwrap();

        let requests = client.transport().requests();
        assert_eq!(requests[0].method(), &Method::DELETE);
        assert_eq!(requests[0].url(), format!("{BASE_URL}/diggers/7"));
        assert_eq!(output(out), "Deleted digger 7\n");
    }
}
