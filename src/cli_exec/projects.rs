use parlor::remote::ProjectUpdate;

use super::workspace::Workspace;
use super::*;

pub(super) fn handle_projects_command(ws: &mut Workspace, command: ProjectCommands) -> Result<()> {
    let client = ws.client()?;
    match command {
        ProjectCommands::List { json } => {
            let list = client.list_projects()?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&list).context("serialize projects json")?
                );
            } else if list.projects.is_empty() {
                println!("No projects");
            } else {
                for p in &list.projects {
                    let marker = if list.active.as_deref() == Some(p.name.as_str()) {
                        "*"
                    } else {
                        " "
                    };
                    if p.display_name.is_empty() || p.display_name == p.name {
                        println!("{} {}", marker, p.name);
                    } else {
                        println!("{} {} ({})", marker, p.name, p.display_name);
                    }
                }
            }
        }
        ProjectCommands::Create { name, instructions } => {
            let stored = client.create_project(&name, &instructions)?;
            ws.config.session.project = Some(stored.clone());
            ws.store.write_config(&ws.config)?;
            println!("Created project {}", stored);
        }
        ProjectCommands::Show { name, json } => {
            let cfg = client.get_project(&name)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&cfg).context("serialize project json")?
                );
            } else {
                println!("name: {}", cfg.name);
                if let Some(created) = &cfg.created {
                    println!("created: {}", created);
                }
                if !cfg.instructions.is_empty() {
                    println!("instructions: {}", cfg.instructions);
                }
            }
        }
        ProjectCommands::Update {
            name,
            display_name,
            instructions,
        } => {
            if display_name.is_none() && instructions.is_none() {
                anyhow::bail!("nothing to update (pass --display-name and/or --instructions)");
            }
            client.update_project(
                &name,
                &ProjectUpdate {
                    display_name,
                    instructions,
                },
            )?;
            println!("Updated project {}", name);
        }
        ProjectCommands::Switch { name } => {
            let active = client.switch_project(name.as_deref())?;
            ws.config.session.project = active.clone();
            ws.store.write_config(&ws.config)?;
            match active {
                Some(p) => println!("Active project: {}", p),
                None => println!("No active project"),
            }
        }
        ProjectCommands::Delete { name } => {
            client.delete_project(&name)?;
            if ws.config.session.project.as_deref() == Some(name.as_str()) {
                ws.config.session.project = None;
                ws.store.write_config(&ws.config)?;
            }
            println!("Deleted project {}", name);
        }
    }
    Ok(())
}
