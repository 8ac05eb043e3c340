//! Closed value sets used by entities and DTO schemas
//!
//! Every enum serialises as `SCREAMING_SNAKE_CASE` and exposes its wire
//! members through [`DomainEnum::MEMBERS`] so schemas can restrict fields to
//! exactly the declared values.

use std::fmt;

/// Enum with a fixed list of wire members
pub trait DomainEnum: Sized + Copy + 'static {
    const MEMBERS: &'static [&'static str];

    /// Wire form of this value
    fn as_str(&self) -> &'static str;
}

macro_rules! domain_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant, )+
        }

        impl DomainEnum for $name {
            const MEMBERS: &'static [&'static str] = &[$($wire),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

domain_enum! {
    /// Employment state of an employee
    pub enum EmployeeStatus {
        Active => "ACTIVE",
        OnLeave => "ON_LEAVE",
        Terminated => "TERMINATED",
    }
}

impl Default for EmployeeStatus {
    fn default() -> Self {
        Self::Active
    }
}

domain_enum! {
    /// Capability-development category of a recommendation
    pub enum RecommendationType {
        Training => "TRAINING",
        Mentoring => "MENTORING",
        Project => "PROJECT",
        Certification => "CERTIFICATION",
        RoleChange => "ROLE_CHANGE",
    }
}

domain_enum! {
    /// Urgency of a recommendation, ordered from lowest to highest
    pub enum Priority {
        Low => "LOW",
        Medium => "MEDIUM",
        High => "HIGH",
        Critical => "CRITICAL",
    }
}

impl Priority {
    /// Ordinal rank: LOW = 1 up to CRITICAL = 4
    pub fn ordinal(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
        }
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

domain_enum! {
    /// Lifecycle state of a recommendation
    pub enum RecommendationStatus {
        Pending => "PENDING",
        Accepted => "ACCEPTED",
        InProgress => "IN_PROGRESS",
        Completed => "COMPLETED",
        Dismissed => "DISMISSED",
    }
}

impl Default for RecommendationStatus {
    fn default() -> Self {
        Self::Pending
    }
}

domain_enum! {
    pub enum ProficiencyLevel {
        Beginner => "BEGINNER",
        Intermediate => "INTERMEDIATE",
        Advanced => "ADVANCED",
        Expert => "EXPERT",
    }
}

domain_enum! {
    pub enum AdminRole {
        SuperAdmin => "SUPER_ADMIN",
        HrAdmin => "HR_ADMIN",
        Manager => "MANAGER",
    }
}

domain_enum! {
    pub enum TrainingStatus {
        Planned => "PLANNED",
        InProgress => "IN_PROGRESS",
        Completed => "COMPLETED",
        Cancelled => "CANCELLED",
    }
}

domain_enum! {
    pub enum MentoringStatus {
        Proposed => "PROPOSED",
        Active => "ACTIVE",
        Completed => "COMPLETED",
        Cancelled => "CANCELLED",
    }
}

domain_enum! {
    pub enum RecognitionCategory {
        Teamwork => "TEAMWORK",
        Innovation => "INNOVATION",
        Leadership => "LEADERSHIP",
        CustomerFocus => "CUSTOMER_FOCUS",
        Excellence => "EXCELLENCE",
    }
}

domain_enum! {
    pub enum NotificationChannel {
        InApp => "IN_APP",
        Email => "EMAIL",
    }
}

domain_enum! {
    /// Milestone kinds recorded on an employee journey
    pub enum JourneyEventKind {
        Hired => "HIRED",
        Promoted => "PROMOTED",
        Transferred => "TRANSFERRED",
        Certified => "CERTIFIED",
        Reviewed => "REVIEWED",
    }
}

domain_enum! {
    pub enum ProjectStatus {
        Planned => "PLANNED",
        Active => "ACTIVE",
        Completed => "COMPLETED",
        OnHold => "ON_HOLD",
    }
}

domain_enum! {
    pub enum CareerStatus {
        Exploring => "EXPLORING",
        Active => "ACTIVE",
        Achieved => "ACHIEVED",
        Abandoned => "ABANDONED",
    }
}
