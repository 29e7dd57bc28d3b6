use anyhow::{anyhow, Result};
use chrono::{FixedOffset, NaiveDate};
use std::env;

use crate::utils::datetime::utc_offset;

pub const DEFAULT_API_BASE: &str = "https://digital.etu.ru/api/mobile";
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 3;

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub http_port: u16,
    pub api_base: String,
    pub semester_start: Option<NaiveDate>,
    pub utc_offset_hours: i32,
}

/// First non-blank value among the given variables.
fn first_var(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| env::var(name).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = first_var(&["TELEGRAM_BOT_TOKEN", "BOT_TOKEN"])
            .ok_or_else(|| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        let port_str = first_var(&["HTTP_PORT", "PORT"])
            .unwrap_or_else(|| "3000".to_string());
        let http_port = port_str
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        let api_base = first_var(&["SCHEDULE_API_BASE"])
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();

        let semester_start = first_var(&["SEMESTER_START"]).and_then(|raw| {
            match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(e) => {
                    tracing::warn!("Ignoring SEMESTER_START '{}': {}", raw, e);
                    None
                }
            }
        });

        let utc_offset_hours = match first_var(&["UTC_OFFSET_HOURS"]) {
            Some(raw) => raw
                .parse::<i32>()
                .ok()
                .filter(|hours| (-12..=14).contains(hours))
                .ok_or_else(|| anyhow!("Invalid UTC_OFFSET_HOURS"))?,
            None => DEFAULT_UTC_OFFSET_HOURS,
        };

        Ok(Config {
            telegram_bot_token: token,
            http_port,
            api_base,
            semester_start,
            utc_offset_hours,
        })
    }

    /// Civil timezone the timetable is written in.
    pub fn offset(&self) -> Result<FixedOffset> {
        utc_offset(self.utc_offset_hours).ok_or_else(|| anyhow!("Invalid UTC_OFFSET_HOURS"))
    }
}
