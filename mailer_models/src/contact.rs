use nutype::nutype;

/// A single submission of the website contact form.
///
/// `name`, `email` and `message` are guaranteed to be non-empty. `email` is
/// not checked for a valid address format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: ContactSubmissionName,
    pub email: ContactSubmissionEmail,
    pub phone: String,
    pub subject: String,
    pub message: ContactSubmissionMessage,
    pub page: String,
}

impl ContactSubmission {
    /// Subject used when the form did not provide one.
    pub const DEFAULT_SUBJECT: &'static str = "Website contact";
}

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display, Serialize, Deserialize)
)]
pub struct ContactSubmissionName(String);

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display, Serialize, Deserialize)
)]
pub struct ContactSubmissionEmail(String);

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display, Serialize, Deserialize)
)]
pub struct ContactSubmissionMessage(String);
