//! Static overview dashboard; figures are fixed sample data

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityItem {
    pub when: &'static str,
    pub who: &'static str,
    pub action: &'static str,
}

pub const STAT_CARDS: &[StatCard] = &[
    StatCard { title: "Total assets", value: "1,248", delta: "+12 this month", icon: "package" },
    StatCard { title: "Components", value: "3,905", delta: "+87 this month", icon: "cpu" },
    StatCard { title: "Employees", value: "312", delta: "+4 this month", icon: "users" },
    StatCard { title: "Branches", value: "9", delta: "no change", icon: "building" },
];

pub const RECENT_ACTIVITY: &[ActivityItem] = &[
    ActivityItem { when: "10 min ago", who: "IT Support", action: "Transferred Laptop Lenovo ThinkPad to J. Doe" },
    ActivityItem { when: "1 hour ago", who: "Admin", action: "Added Memory Kingston (16GB DDR4 3200MHz RAM)" },
    ActivityItem { when: "Yesterday", who: "Admin", action: "Created status \"In repair\"" },
    ActivityItem { when: "2 days ago", who: "IT Support", action: "Updated branch \"North office\" address" },
];
