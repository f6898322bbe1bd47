// prose-core-client
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fs;
use std::iter::once;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use common::{enable_debug_logging, load_config};
use dialoguer::{theme::ColorfulTheme, Confirm, Select};
use serde::Deserialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use tracing::{error, info};

use prose_device_trust::app::deps::AppDependencies;
use prose_device_trust::app::services::MemberDeviceService;
use prose_device_trust::dtos::{Device, UserId, VerificationDialog};
use prose_device_trust::{DeviceVerificationPrompt, InMemoryDeviceTrustService};

use crate::type_display::{DeviceRowEnvelope, TrustControlEnvelope};

mod type_display;

#[derive(Deserialize)]
struct DevicesFixture {
    members: Vec<MemberDevices>,
}

#[derive(Deserialize)]
struct MemberDevices {
    user_id: UserId,
    devices: Vec<Device>,
}

struct TerminalVerificationPrompt;

#[async_trait]
impl DeviceVerificationPrompt for TerminalVerificationPrompt {
    async fn confirm(&self, dialog: VerificationDialog) -> bool {
        println!("{dialog}\n");

        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(dialog.confirm_button_label)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}

fn load_devices(store: &InMemoryDeviceTrustService, path: &Path) -> Result<()> {
    let json = fs::read_to_string(path).with_context(|| format!("Failed to read {:?}.", path))?;
    let fixture = serde_json::from_str::<DevicesFixture>(&json)
        .with_context(|| format!("Failed to parse {:?}.", path))?;

    for member in fixture.members {
        for device in member.devices {
            store.insert_device(&member.user_id, device);
        }
    }
    Ok(())
}

fn select_command() -> Selection {
    let options: Vec<Selection> = Selection::iter().collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("What do you want to do?")
        .default(0)
        .items(&options[..])
        .interact()
        .ok();

    let Some(selection) = selection else {
        return Selection::Noop;
    };

    println!();
    options[selection].clone()
}

fn select_member(store: &InMemoryDeviceTrustService) -> Result<Option<UserId>> {
    let user_ids = store.user_ids();
    if user_ids.is_empty() {
        println!("No members loaded.");
        return Ok(None);
    }

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a member")
        .default(0)
        .items(&user_ids[..])
        .interact()?;
    println!();

    Ok(user_ids.into_iter().nth(selection))
}

fn device_rows(
    service: &MemberDeviceService,
    store: &InMemoryDeviceTrustService,
    user_id: &UserId,
    hide_info: bool,
) -> Vec<DeviceRowEnvelope> {
    store
        .devices(user_id)
        .into_iter()
        .map(|device| DeviceRowEnvelope {
            view: service.render(user_id, Some(&device), hide_info),
            device,
        })
        .collect()
}

fn list_devices(
    service: &MemberDeviceService,
    store: &InMemoryDeviceTrustService,
    user_id: &UserId,
    hide_info: bool,
) {
    let rows = device_rows(service, store, user_id, hide_info)
        .into_iter()
        .map(|row| row.to_string())
        .collect::<Vec<_>>();

    if rows.is_empty() {
        println!("{user_id} has no devices.");
        return;
    }
    println!("Devices of {user_id}:\n{}", rows.join("\n"));
}

async fn change_trust(
    service: &MemberDeviceService,
    store: &InMemoryDeviceTrustService,
    user_id: &UserId,
    hide_info: bool,
) -> Result<()> {
    let rows = device_rows(service, store, user_id, hide_info);
    if rows.is_empty() {
        println!("{user_id} has no devices.");
        return Ok(());
    }

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a device")
        .default(0)
        .items(&rows[..])
        .interact()?;
    println!();

    let controls = rows[selection]
        .view
        .controls()
        .cloned()
        .map(TrustControlEnvelope)
        .collect::<Vec<_>>();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select an action")
        .default(0)
        .items(&controls[..])
        .interact()?;
    println!();

    service.activate(&controls[selection].0).await?;
    list_devices(service, store, user_id, hide_info);
    Ok(())
}

trait StringExt {
    fn truncate_to(&self, new_len: usize) -> String;
}

impl StringExt for String {
    fn truncate_to(&self, new_len: usize) -> String {
        let count = self.chars().count();

        if count <= new_len {
            return self.clone();
        }

        self.chars().take(new_len - 1).chain(once('…')).collect()
    }
}

#[derive(EnumIter, Display, Clone)]
enum Selection {
    #[strum(serialize = "List devices")]
    ListDevices,
    #[strum(serialize = "Change device trust")]
    ChangeDeviceTrust,
    #[strum(serialize = "Toggle device info")]
    ToggleDeviceInfo,
    Noop,
    Exit,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config()?;
    enable_debug_logging(config.log_level)?;

    let store = Arc::new(InMemoryDeviceTrustService::new());
    load_devices(&store, &config.devices_file)?;
    info!(path = ?config.devices_file, "Loaded devices.");

    let deps = AppDependencies {
        device_trust_domain_service: store.clone(),
        verification_prompt: Arc::new(TerminalVerificationPrompt),
    };
    let service = MemberDeviceService::from(&deps);
    let mut hide_info = false;

    loop {
        println!();

        match select_command() {
            Selection::ListDevices => {
                if let Some(user_id) = select_member(&store)? {
                    list_devices(&service, &store, &user_id, hide_info);
                }
            }
            Selection::ChangeDeviceTrust => {
                let Some(user_id) = select_member(&store)? else {
                    continue;
                };
                if let Err(err) = change_trust(&service, &store, &user_id, hide_info).await {
                    error!("Failed to change device trust: {err:?}");
                    println!("Failed to change device trust: {err}");
                }
            }
            Selection::ToggleDeviceInfo => {
                hide_info = !hide_info;
                println!(
                    "Device info is now {}.",
                    if hide_info { "hidden" } else { "shown" }
                );
            }
            Selection::Noop => {}
            Selection::Exit => {
                println!("Bye bye!");
                return Ok(());
            }
        }
    }
}
