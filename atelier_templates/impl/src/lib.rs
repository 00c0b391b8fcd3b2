use std::sync::Arc;

use atelier_templates_contracts::{
    RenderedEmail, Template, TemplateService, BASE_TEMPLATE, TEMPLATES,
};
use tera::Tera;

#[derive(Debug, Clone, Default)]
pub struct TemplateServiceImpl {
    state: State,
}

#[derive(Debug, Clone)]
struct State(Arc<Tera>);

impl Default for State {
    fn default() -> Self {
        let mut tera = Tera::default();

        tera.add_raw_template("base", BASE_TEMPLATE).unwrap();

        for &(name, html, text) in TEMPLATES {
            tera.add_raw_template(&format!("{name}.html"), html).unwrap();
            tera.add_raw_template(&format!("{name}.txt"), text).unwrap();
        }

        Self(tera.into())
    }
}

impl TemplateService for TemplateServiceImpl {
    fn render<T: Template>(&self, template: &T) -> anyhow::Result<RenderedEmail> {
        let context = tera::Context::from_serialize(template)?;
        Ok(RenderedEmail {
            html: self.state.0.render(&format!("{}.html", T::NAME), &context)?,
            text: self.state.0.render(&format!("{}.txt", T::NAME), &context)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use atelier_templates_contracts::{InquiryConfirmationTemplate, InquiryNotificationTemplate};

    use super::*;

    #[test]
    fn inquiry_notification() {
        let rendered = render(InquiryNotificationTemplate {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            company: Some("Acme Corp".into()),
            project_type: "Consulting".into(),
            budget: None,
            message: "line one\nline two".into(),
        });

        assert!(rendered.html.contains("Jane Doe"));
        assert!(rendered.html.contains("Acme Corp"));
        assert!(rendered.html.contains("line one<br>line two"));
        assert!(!rendered.html.contains("Budget:"));
        assert!(rendered.text.contains("line one\nline two"));
        assert!(!rendered.text.contains("Budget:"));
    }

    #[test]
    fn inquiry_notification_escapes_markup() {
        let rendered = render(InquiryNotificationTemplate {
            name: "<script>".into(),
            email: "jane@example.com".into(),
            company: None,
            project_type: "Other".into(),
            budget: Some("Under $10,000".into()),
            message: "a <b>bold</b> claim".into(),
        });

        assert!(rendered.html.contains("&lt;script&gt;"));
        assert!(rendered.html.contains("a &lt;b&gt;bold&lt;&#x2F;b&gt; claim"));
        assert!(rendered.html.contains("Under $10,000"));
    }

    #[test]
    fn inquiry_confirmation() {
        let rendered = render(InquiryConfirmationTemplate {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            project_type: "Web Application".into(),
        });

        assert!(rendered.html.contains("Thank You, Jane Doe!"));
        assert!(rendered.html.contains("your web application requirements"));
        assert!(rendered.text.contains("web application"));
    }

    fn render<T: Template + 'static>(template: T) -> RenderedEmail {
        // Arrange
        let sut = TemplateServiceImpl::default();

        // Act
        let result = sut.render(&template);

        // Assert
        result.unwrap()
    }
}
