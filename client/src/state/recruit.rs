//! Recruitment intake wizard.
//!
//! DESIGN
//! ======
//! A linear five-step machine. `next` advances only when every required
//! field of the current step is filled; `previous` is refused on step 1.
//! Submission re-checks steps 1-4 and packs every non-empty field into one
//! multipart request. A failed submission keeps the wizard on the last step
//! with all values intact.
//!
//! The sport and team pickers are populated from lookups fetched at mount.
//! Picking a sport never narrows the team list.

#[cfg(test)]
#[path = "recruit_test.rs"]
mod recruit_test;

use wire::{ApiError, Encoding, SaveRequest, Team};

/// Landing route the wizard returns to after a successful submission.
pub const RECRUIT_LANDING_PATH: &str = "/recruit";

/// Multipart part name for the optional supporting document.
pub const ATTACHMENT_FIELD: &str = "attachment";

pub const SUBMITTED_MESSAGE: &str = "Application submitted successfully!";

const STEP_INCOMPLETE: &str = "Please fill in all required fields before proceeding.";
const FORM_INCOMPLETE: &str = "Please fill in all required fields in each section.";

// =============================================================================
// STEPS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecruitStep {
    #[default]
    Personal = 1,
    Academic = 2,
    Athletic = 3,
    Contact = 4,
    Additional = 5,
}

impl RecruitStep {
    pub const ALL: [Self; 5] = [Self::Personal, Self::Academic, Self::Athletic, Self::Contact, Self::Additional];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Personal => "Personal Information",
            Self::Academic => "Academic Information",
            Self::Athletic => "Athletic Information",
            Self::Contact => "Contact Information",
            Self::Additional => "Additional Materials",
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            Self::Personal => Some(Self::Academic),
            Self::Academic => Some(Self::Athletic),
            Self::Athletic => Some(Self::Contact),
            Self::Contact => Some(Self::Additional),
            Self::Additional => None,
        }
    }

    pub fn previous(self) -> Option<Self> {
        match self {
            Self::Personal => None,
            Self::Academic => Some(Self::Personal),
            Self::Athletic => Some(Self::Academic),
            Self::Contact => Some(Self::Athletic),
            Self::Additional => Some(Self::Contact),
        }
    }

    /// Fields collected on this step, in display order.
    pub fn fields(self) -> impl Iterator<Item = RecruitField> {
        RecruitField::ALL.into_iter().filter(move |f| f.step() == self)
    }
}

// =============================================================================
// FIELDS
// =============================================================================

/// How a field is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecruitInput {
    Text,
    Date,
    Number,
    Email,
    Phone,
    Gender,
    /// Populated from the sports lookup.
    Sport,
    /// Populated from the teams lookup.
    Team,
    LongText,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecruitField {
    FirstName,
    LastName,
    DateOfBirth,
    Gender,
    Height,
    Weight,
    GraduationYear,
    Gpa,
    Major,
    Sport,
    Team,
    Position,
    YearsOfExperience,
    Achievements,
    Email,
    PhoneNumber,
    AdditionalComments,
}

impl RecruitField {
    pub const ALL: [Self; 17] = [
        Self::FirstName,
        Self::LastName,
        Self::DateOfBirth,
        Self::Gender,
        Self::Height,
        Self::Weight,
        Self::GraduationYear,
        Self::Gpa,
        Self::Major,
        Self::Sport,
        Self::Team,
        Self::Position,
        Self::YearsOfExperience,
        Self::Achievements,
        Self::Email,
        Self::PhoneNumber,
        Self::AdditionalComments,
    ];

    /// Multipart part name sent to the recruitment endpoint.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::DateOfBirth => "dateOfBirth",
            Self::Gender => "gender",
            Self::Height => "height",
            Self::Weight => "weight",
            Self::GraduationYear => "graduationYear",
            Self::Gpa => "gpa",
            Self::Major => "major",
            Self::Sport => "sport",
            Self::Team => "team",
            Self::Position => "position",
            Self::YearsOfExperience => "yearsOfExperience",
            Self::Achievements => "achievements",
            Self::Email => "email",
            Self::PhoneNumber => "phoneNumber",
            Self::AdditionalComments => "additionalComments",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::DateOfBirth => "Date of Birth",
            Self::Gender => "Gender",
            Self::Height => "Height (cm)",
            Self::Weight => "Weight (kg)",
            Self::GraduationYear => "Expected Graduation Year",
            Self::Gpa => "GPA",
            Self::Major => "Intended Major",
            Self::Sport => "Sport",
            Self::Team => "Team",
            Self::Position => "Position",
            Self::YearsOfExperience => "Years of Experience",
            Self::Achievements => "Athletic Achievements",
            Self::Email => "Email",
            Self::PhoneNumber => "Phone Number",
            Self::AdditionalComments => "Additional Comments",
        }
    }

    pub fn step(self) -> RecruitStep {
        match self {
            Self::FirstName | Self::LastName | Self::DateOfBirth | Self::Gender | Self::Height | Self::Weight => {
                RecruitStep::Personal
            }
            Self::GraduationYear | Self::Gpa | Self::Major => RecruitStep::Academic,
            Self::Sport | Self::Team | Self::Position | Self::YearsOfExperience | Self::Achievements => {
                RecruitStep::Athletic
            }
            Self::Email | Self::PhoneNumber => RecruitStep::Contact,
            Self::AdditionalComments => RecruitStep::Additional,
        }
    }

    pub fn required(self) -> bool {
        !matches!(self, Self::Major | Self::Achievements | Self::AdditionalComments)
    }

    pub fn input(self) -> RecruitInput {
        match self {
            Self::DateOfBirth => RecruitInput::Date,
            Self::Gender => RecruitInput::Gender,
            Self::Height | Self::Weight | Self::GraduationYear | Self::Gpa | Self::YearsOfExperience => {
                RecruitInput::Number
            }
            Self::Sport => RecruitInput::Sport,
            Self::Team => RecruitInput::Team,
            Self::Email => RecruitInput::Email,
            Self::PhoneNumber => RecruitInput::Phone,
            Self::Achievements | Self::AdditionalComments => RecruitInput::LongText,
            Self::FirstName | Self::LastName | Self::Major | Self::Position => RecruitInput::Text,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Required fields left empty on a step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingFields {
    pub step: RecruitStep,
    pub fields: Vec<RecruitField>,
}

// =============================================================================
// WIZARD
// =============================================================================

/// Wizard state for one visit to the recruitment form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecruitWizard {
    step: RecruitStep,
    values: [String; 17],
    error: Option<String>,
    submitting: bool,
    submitted: bool,
}

impl RecruitWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> RecruitStep {
        self.step
    }

    pub fn value(&self, field: RecruitField) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: RecruitField, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// True once the server accepted the application.
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Required fields of `step` that are empty or whitespace.
    pub fn missing(&self, step: RecruitStep) -> Vec<RecruitField> {
        step.fields().filter(|f| f.required() && self.value(*f).trim().is_empty()).collect()
    }

    pub fn is_step_complete(&self, step: RecruitStep) -> bool {
        self.missing(step).is_empty()
    }

    /// Advance one step if the current step is complete.
    ///
    /// # Errors
    ///
    /// Returns the missing fields and leaves the step unchanged.
    pub fn next(&mut self) -> Result<RecruitStep, MissingFields> {
        let current = self.step();
        let fields = self.missing(current);
        if !fields.is_empty() {
            self.error = Some(STEP_INCOMPLETE.to_owned());
            return Err(MissingFields { step: current, fields });
        }
        self.error = None;
        if let Some(next) = current.next() {
            self.step = next;
        }
        Ok(self.step())
    }

    /// Go back one step. Returns `None` on step 1.
    pub fn previous(&mut self) -> Option<RecruitStep> {
        let previous = self.step().previous()?;
        self.step = previous;
        self.error = None;
        Some(previous)
    }

    /// Validate steps 1-4 and build the submission body. The attachment, if
    /// any, is added by the transport under [`ATTACHMENT_FIELD`].
    ///
    /// # Errors
    ///
    /// Returns the first incomplete step; nothing is sent.
    pub fn begin_submit(&mut self) -> Result<SaveRequest, MissingFields> {
        for step in [RecruitStep::Personal, RecruitStep::Academic, RecruitStep::Athletic, RecruitStep::Contact] {
            let fields = self.missing(step);
            if !fields.is_empty() {
                self.error = Some(FORM_INCOMPLETE.to_owned());
                return Err(MissingFields { step, fields });
            }
        }
        self.error = None;
        self.submitting = true;
        let pairs = RecruitField::ALL.into_iter().map(|f| (f.wire_name(), self.value(f).trim().to_owned()));
        Ok(SaveRequest::new(Encoding::Multipart, pairs).without_empty())
    }

    /// Settle a submission. Returns the route to navigate to on success.
    pub fn finish_submit(&mut self, result: Result<(), ApiError>) -> Option<&'static str> {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.submitted = true;
                Some(RECRUIT_LANDING_PATH)
            }
            Err(err) => {
                self.error = Some(err.user_message());
                None
            }
        }
    }
}

/// Team picker entries as `(value, label)`. Every team is offered whatever
/// sport is chosen; the label names the team's sport.
pub fn team_options(teams: &[Team]) -> Vec<(String, String)> {
    teams
        .iter()
        .map(|team| {
            let label = if team.sport_name.is_empty() {
                team.name.clone()
            } else {
                format!("{} ({})", team.name, team.sport_name)
            };
            (team.id.to_string(), label)
        })
        .collect()
}
