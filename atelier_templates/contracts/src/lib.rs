use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render the HTML and plain text variants of the given template.
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<RenderedEmail>;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        result: RenderedEmail,
    ) -> Self {
        self.expect_render()
            .once()
            .with(mockall::predicate::eq(template))
            .return_once(|_| Ok(result));
        self
    }
}

/// An email body rendered in both variants. Providers are given the pair so
/// text-only clients still get a readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub html: String,
    pub text: String,
}

pub trait Template: Serialize {
    const NAME: &'static str;
    const HTML: &'static str;
    const TEXT: &'static str;
}

pub const BASE_TEMPLATE: &str = include_str!("../templates/base.html");

macro_rules! templates {
    ($( $ident:ident ( $path:literal ), )* ) => {
        $(
            impl Template for $ident {
                const NAME: &'static str = stringify!($ident);
                const HTML: &'static str =
                    include_str!(concat!("../templates/", $path, ".html"));
                const TEXT: &'static str =
                    include_str!(concat!("../templates/", $path, ".txt"));
            }
        )*

        pub const TEMPLATES: &[(&str, &str, &str)] = &[
            $( ($ident::NAME, $ident::HTML, $ident::TEXT) ),*
        ];
    };
}

templates! {
    InquiryNotificationTemplate("inquiry_notification"),
    InquiryConfirmationTemplate("inquiry_confirmation"),
}

/// Data for the internal sales notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InquiryNotificationTemplate {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub project_type: String,
    pub budget: Option<String>,
    pub message: String,
}

/// Data for the confirmation sent back to the submitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InquiryConfirmationTemplate {
    pub name: String,
    pub email: String,
    pub project_type: String,
}
