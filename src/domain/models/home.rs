/// Content of the home dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct HomePageData {
    pub page_title: String,
    pub banner: Banner,
    pub stats: Stats,
    pub scan_details: ScanDetails,
    pub support: SupportPanel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub status: String,
    pub compliance: String,
    pub compliance_note: String,
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatValue {
    pub value: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub total_hosts: StatValue,
    pub live_compliance: StatValue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScanDetails {
    pub status: String,
    pub last_submitted: String,
    pub next_due: String,
    pub status_note: String,
    pub footer_buttons: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SupportPanel {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<String>,
    pub cta_primary: String,
    pub contact_title: String,
    pub contact_cta: String,
}
