//! New-scan form model and validation.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static TARGET_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s,;]+").expect("valid separator regex"));

/// `datetime-local` input format.
const SCHEDULE_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bandwidth {
    Low,
    #[default]
    Medium,
    High,
}

impl Bandwidth {
    pub const ALL: [Bandwidth; 3] = [Bandwidth::Low, Bandwidth::Medium, Bandwidth::High];

    pub fn label(&self) -> &'static str {
        match self {
            Bandwidth::Low => "Low",
            Bandwidth::Medium => "Medium",
            Bandwidth::High => "High",
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            "Low" => Bandwidth::Low,
            "High" => Bandwidth::High,
            _ => Bandwidth::Medium,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssetType {
    #[default]
    Ip,
    Dns,
}

impl AssetType {
    pub fn label(&self) -> &'static str {
        match self {
            AssetType::Ip => "IP",
            AssetType::Dns => "DNS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetMode {
    #[default]
    All,
    Select,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaunchMode {
    #[default]
    Now,
    Later,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
    Title,
    Targets,
    ScheduleAt,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanForm {
    pub title: String,
    pub bandwidth: Bandwidth,
    pub asset_type: AssetType,
    pub target_mode: TargetMode,
    pub targets: String,
    pub launch: LaunchMode,
    /// `datetime-local` value, `yyyy-MM-ddThh:mm`.
    pub schedule_at: String,
}

pub type FormErrors = BTreeMap<FormField, &'static str>;

/// Targets resolved from the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Targets {
    All,
    List(Vec<String>),
}

/// Validated form, ready to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    pub title: String,
    pub bandwidth: Bandwidth,
    pub asset_type: AssetType,
    pub targets: Targets,
    pub launch: LaunchMode,
    pub schedule_at: Option<String>,
}

impl ScanForm {
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        if self.title.trim().is_empty() {
            errors.insert(FormField::Title, "Title is required.");
        }
        if self.target_mode == TargetMode::Select && self.targets.trim().is_empty() {
            errors.insert(FormField::Targets, "Please enter one or more IPs/DNS targets.");
        }
        if self.launch == LaunchMode::Later && self.schedule_at.is_empty() {
            errors.insert(FormField::ScheduleAt, "Please choose a date & time.");
        }
        errors
    }

    pub fn submit(&self) -> Result<ScanRequest, FormErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        let targets = match self.target_mode {
            TargetMode::All => Targets::All,
            TargetMode::Select => Targets::List(parse_targets(&self.targets)),
        };
        Ok(ScanRequest {
            title: self.title.trim().to_string(),
            bandwidth: self.bandwidth,
            asset_type: self.asset_type,
            targets,
            launch: self.launch,
            schedule_at: (self.launch == LaunchMode::Later).then(|| self.schedule_at.clone()),
        })
    }

    pub fn submit_label(&self) -> &'static str {
        match self.launch {
            LaunchMode::Now => "Start Scan",
            LaunchMode::Later => "Schedule Scan",
        }
    }

    /// Targets line of the live summary; `None` when nothing is selected yet.
    pub fn target_summary(&self) -> Option<String> {
        match self.target_mode {
            TargetMode::All => Some("All IPs".to_string()),
            TargetMode::Select => match parse_targets(&self.targets).len() {
                0 => None,
                n => Some(format!("{n} selected")),
            },
        }
    }

    /// Launch line of the live summary.
    pub fn launch_summary(&self) -> String {
        match self.launch {
            LaunchMode::Now => "Launch Now".to_string(),
            LaunchMode::Later if self.schedule_at.is_empty() => "Scheduled (unset)".to_string(),
            LaunchMode::Later => {
                NaiveDateTime::parse_from_str(&self.schedule_at, SCHEDULE_FORMAT)
                    .map(|at| at.format("%b %-d, %Y %H:%M").to_string())
                    .unwrap_or_else(|_| self.schedule_at.clone())
            }
        }
    }
}

/// Split a free-form target list on whitespace, commas and semicolons.
pub fn parse_targets(raw: &str) -> Vec<String> {
    TARGET_SEPARATOR
        .split(raw)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_requires_title_only() {
        let errors = ScanForm::default().validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(&FormField::Title), Some(&"Title is required."));
    }

    #[test]
    fn test_select_mode_and_later_launch_need_values() {
        let form = ScanForm {
            title: "Quarterly".into(),
            target_mode: TargetMode::Select,
            targets: "   ".into(),
            launch: LaunchMode::Later,
            ..ScanForm::default()
        };
        let errors = form.validate();
        assert!(errors.contains_key(&FormField::Targets));
        assert!(errors.contains_key(&FormField::ScheduleAt));
        assert!(!errors.contains_key(&FormField::Title));
        assert_eq!(form.submit_label(), "Schedule Scan");
    }

    #[test]
    fn test_parse_targets_mixed_separators() {
        let targets = parse_targets("10.10.1.10, 10.10.1.11;host1.example.com\n\n  10.0.0.1");
        assert_eq!(
            targets,
            vec!["10.10.1.10", "10.10.1.11", "host1.example.com", "10.0.0.1"]
        );
        assert!(parse_targets(" ,; ").is_empty());
    }

    #[test]
    fn test_submit_builds_request() {
        let form = ScanForm {
            title: "  Weekly ".into(),
            target_mode: TargetMode::Select,
            targets: "a.example.com b.example.com".into(),
            ..ScanForm::default()
        };
        let request = form.submit().unwrap();
        assert_eq!(request.title, "Weekly");
        assert_eq!(
            request.targets,
            Targets::List(vec!["a.example.com".into(), "b.example.com".into()])
        );
        assert_eq!(request.schedule_at, None);

        let all = ScanForm {
            title: "All".into(),
            launch: LaunchMode::Later,
            schedule_at: "2026-01-14T10:00".into(),
            ..ScanForm::default()
        };
        let request = all.submit().unwrap();
        assert_eq!(request.targets, Targets::All);
        assert_eq!(request.schedule_at.as_deref(), Some("2026-01-14T10:00"));
    }

    #[test]
    fn test_live_summary() {
        let mut form = ScanForm::default();
        assert_eq!(form.target_summary().as_deref(), Some("All IPs"));
        assert_eq!(form.launch_summary(), "Launch Now");

        form.target_mode = TargetMode::Select;
        assert_eq!(form.target_summary(), None);
        form.targets = "10.0.0.1, 10.0.0.2".into();
        assert_eq!(form.target_summary().as_deref(), Some("2 selected"));

        form.launch = LaunchMode::Later;
        assert_eq!(form.launch_summary(), "Scheduled (unset)");
        form.schedule_at = "2026-01-14T09:05".into();
        assert_eq!(form.launch_summary(), "Jan 14, 2026 09:05");
        form.schedule_at = "soon".into();
        assert_eq!(form.launch_summary(), "soon");
    }
}
