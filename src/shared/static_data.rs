//! Static dashboard content.

use crate::domain::models::{
    Banner, DiscoveryStatus, HomePageData, NetworkScan, ScanDetails, StatValue, Stats,
    SupportPanel, User,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Demo identity stored on first visit.
pub fn demo_user() -> User {
    User {
        name: "Shrutika Patil".to_string(),
        role: Some("Merchant Portal".to_string()),
        initials: Some("SP".to_string()),
        email: None,
        avatar_url: None,
    }
}

pub fn home_data() -> HomePageData {
    HomePageData {
        page_title: "PCI dashboard".to_string(),
        banner: Banner {
            status: "Your Network Scans".to_string(),
            compliance: "Not Compliant".to_string(),
            compliance_note: "Require immediate action".to_string(),
            actions: strings(&["Start Scan", "Asset Wizard"]),
        },
        stats: Stats {
            total_hosts: StatValue {
                value: "129".to_string(),
                note: "Active network Host Monitored".to_string(),
            },
            live_compliance: StatValue {
                value: "0%".to_string(),
                note: "Require immediate attention".to_string(),
            },
        },
        scan_details: ScanDetails {
            status: "Undefined".to_string(),
            last_submitted: "N/A".to_string(),
            next_due: "N/A".to_string(),
            status_note: "Not Started".to_string(),
            footer_buttons: strings(&["Scan History", "All vulnerabilities"]),
        },
        support: SupportPanel {
            title: "Support Center".to_string(),
            subtitle: "General FAQs & help".to_string(),
            items: strings(&[
                "How do I configure my IPS to allow PCI Scans ?",
                "What ip addresses do I need to scan?",
                "What steps do I take after I scan?",
                "How do I generate reports?",
                "How do I change my login credentials?",
            ]),
            cta_primary: "PCI Compliance Playbook".to_string(),
            contact_title: "Need personalized help?".to_string(),
            contact_cta: "Contact Support".to_string(),
        },
    }
}

pub const DISCOVERY_TABS: [&str; 7] = [
    "Discovery",
    "New Scan",
    "Scheduled Scans",
    "Scan Results",
    "Vulnerabilities",
    "False Positive History",
    "Open Services Report",
];

pub fn discovery_scans() -> Vec<NetworkScan> {
    vec![
        NetworkScan {
            id: "1".to_string(),
            title: "IPSCAN".to_string(),
            status: DiscoveryStatus::Failed,
            date: "01/14/2026".to_string(),
        },
        NetworkScan {
            id: "2".to_string(),
            title: "allIPscan".to_string(),
            status: DiscoveryStatus::Failed,
            date: "01/14/2026".to_string(),
        },
    ]
}

pub const SUPPORT_WELCOME: &str = "Qualys offers around-the-clock support, every day of the year. \
Our global infrastructure is designed to provide top-notch assistance wherever you need. \
For account management, technical assistance, false positive reviews, and more, \
don't hesitate to reach out to our support team.";
