use serde::Serialize;

pub trait TemplateService: Send + Sync + 'static {
    /// Render the given template.
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<String>;
}

pub trait Template: Serialize {
    const NAME: &'static str;
    const TEMPLATE: &'static str;
}

macro_rules! templates {
    ($( $ident:ident ( $path:literal ), )* ) => {
        $(
            impl Template for $ident {
                const NAME: &'static str = stringify!($ident);
                const TEMPLATE: &'static str = include_str!(concat!("../templates/", $path));
            }
        )*

        pub const TEMPLATES: &[(&str, &str)] = &[
            $( ($ident::NAME, $ident::TEMPLATE) ),*
        ];
    };
}

templates! {
    ContactMessageTextTemplate("contact_message.txt"),
    ContactMessageHtmlTemplate("contact_message.html"),
}

/// Plain text body of a contact form email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessageTextTemplate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub page: String,
    pub message: String,
}

/// HTML body of a contact form email.
///
/// The fields are inserted verbatim; `message` is expected to already
/// contain `<br/>` instead of newlines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessageHtmlTemplate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub page: String,
    pub message: String,
}
