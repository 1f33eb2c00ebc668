//! Project commands.

use std::io::Write;

use anyhow::{Context, Result, bail};
use dn_api::{Client, Transport};
use dn_core::{Credential, Project, ProjectChanges};

use super::util::{write_field, write_json, write_row};
use crate::cli::ProjectsAction;

pub fn run<W: Write, T: Transport>(
    writer: &mut W,
    client: &Client<T>,
    credential: &Credential,
    action: &ProjectsAction,
) -> Result<()> {
    match action {
        ProjectsAction::List { json } => {
            let projects = client
                .projects(credential)
                .context("failed to list projects")?;
            if *json {
                write_json(writer, &projects)
            } else {
                write_table(writer, &projects)
            }
        }
        ProjectsAction::Get { id, json } => {
            let project = client
                .project(credential, *id)
                .with_context(|| format!("failed to fetch project {id}"))?;
            if *json {
                write_json(writer, &project)
            } else {
                write_details(writer, &project)
            }
        }
        ProjectsAction::Create { name, description } => {
            let changes = ProjectChanges::new().name(name).description(description);
            let project = client
                .create_project(credential, changes)
                .context("failed to create project")?;
            writeln!(writer, "Created project {}", project.id())?;
            Ok(())
        }
        ProjectsAction::Update {
            id,
            name,
            description,
            replace,
        } => {
            let mut changes = ProjectChanges::new();
            if let Some(name) = name {
                changes = changes.name(name);
            }
            if let Some(description) = description {
                changes = changes.description(description);
            }
            if changes.is_empty() {
                bail!("nothing to update: pass --name and/or --description");
            }

            let updated = if *replace {
                let mut project = client
                    .project(credential, *id)
                    .with_context(|| format!("failed to fetch project {id}"))?;
                changes.apply(&mut project);
                client.replace_project(&project)
            } else {
                client.merge_project(&Project::reference(credential.clone(), *id), changes)
            }
            .with_context(|| format!("failed to update project {id}"))?;

            write_details(writer, &updated)
        }
        ProjectsAction::Delete { id } => {
            client
                .delete_project(&Project::reference(credential.clone(), *id))
                .with_context(|| format!("failed to delete project {id}"))?;
            writeln!(writer, "Deleted project {id}")?;
            Ok(())
        }
    }
}

fn write_table<W: Write>(writer: &mut W, projects: &[Project]) -> Result<()> {
    if projects.is_empty() {
        writeln!(writer, "No projects found.")?;
        return Ok(());
    }

    write_row(writer, &format!("{:<8} {:<24} DESCRIPTION", "ID", "NAME"))?;
    for project in projects {
        write_row(
            writer,
            &format!(
                "{:<8} {:<24} {}",
                project.id(),
                project.name(),
                project.description()
            ),
        )?;
    }
    Ok(())
}

fn write_details<W: Write>(writer: &mut W, project: &Project) -> Result<()> {
    write_field(writer, "ID", project.id())?;
    write_field(writer, "Name", project.name())?;
    write_field(writer, "Description", project.description())
}
