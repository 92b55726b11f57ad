//! Wizard step handlers.
//!
//! One handler per exposed endpoint. Handlers receive the authenticated
//! user, the caller's session id, and the submission (if any), and return
//! a [`StepResponse`] for the transport layer to execute: either a named
//! template with a context mapping, or a redirect. Rendering and routing
//! themselves are external concerns.

use crate::service::{NewComputerInput, ShopService};
use crate::ShopError;
use rig_auth::{require_login, User};
use rig_commerce::catalog;
use rig_commerce::error::CommerceError;
use rig_commerce::ids::OrderId;
use rig_commerce::wizard::{apply, BuildSession, Submission, WizardStep, START_OVER_NOTICE};
use rig_store::{Session, SessionId};
use serde_json::json;

/// Outcome of one wizard interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum StepResponse {
    /// Render a named template with a context mapping.
    Render {
        template: &'static str,
        context: serde_json::Value,
    },
    /// Redirect to another location, optionally flashing a notice.
    Redirect {
        location: String,
        notice: Option<String>,
    },
}

impl StepResponse {
    fn render(template: &'static str, context: serde_json::Value) -> Self {
        StepResponse::Render { template, context }
    }

    fn redirect(location: String) -> Self {
        StepResponse::Redirect {
            location,
            notice: None,
        }
    }

    fn redirect_with_notice(location: String, notice: &str) -> Self {
        StepResponse::Redirect {
            location,
            notice: Some(notice.to_string()),
        }
    }
}

/// Route for a wizard step.
pub fn step_route(step: WizardStep) -> String {
    format!("/{}/", step.as_str())
}

/// Route for the order confirmation page.
pub fn order_success_route(order_id: &OrderId) -> String {
    format!("/success/{}/", order_id)
}

fn template_for(step: WizardStep) -> &'static str {
    match step {
        WizardStep::Case => "shop/case_selection.html",
        WizardStep::Processor => "shop/processor_selection.html",
        WizardStep::Memory => "shop/memory_selection.html",
        WizardStep::Storage => "shop/storage_selection.html",
        WizardStep::Graphics => "shop/graphics_selection.html",
        WizardStep::Color => "shop/color_selection.html",
        WizardStep::Peripherals => "shop/peripherals_selection.html",
        WizardStep::DeviceType => "shop/device_type_selection.html",
        WizardStep::Summary => "shop/summary.html",
        WizardStep::OrderPlaced => "shop/order_success.html",
    }
}

fn choices_for(step: WizardStep) -> Option<&'static [(&'static str, &'static str)]> {
    match step {
        WizardStep::Case => Some(catalog::case_choices()),
        WizardStep::Processor => Some(catalog::processor_choices()),
        WizardStep::Memory => Some(catalog::memory_choices()),
        WizardStep::Storage => Some(catalog::storage_choices()),
        WizardStep::Graphics => Some(catalog::graphics_choices()),
        WizardStep::Color => Some(catalog::color_choices()),
        WizardStep::Peripherals => Some(catalog::peripheral_choices()),
        _ => None,
    }
}

fn form_context(step: WizardStep, errors: &[String]) -> serde_json::Value {
    json!({
        "step": step.as_str(),
        "title": step.display_name(),
        "step_number": step.number(),
        "total_steps": WizardStep::all().len(),
        "choices": choices_for(step),
        "errors": errors,
    })
}

/// The wizard: session-bag state machine in front of the shop facade.
#[derive(Debug, Clone)]
pub struct Wizard {
    service: ShopService,
    sessions: Session<BuildSession>,
}

impl Wizard {
    pub fn new(service: ShopService, sessions: Session<BuildSession>) -> Self {
        Self { service, sessions }
    }

    /// The shop landing page.
    pub fn index(&self, user: &User) -> Result<StepResponse, ShopError> {
        require_login(user)?;
        Ok(StepResponse::render(
            "shop/index.html",
            json!({ "user": user.display_name() }),
        ))
    }

    /// One selection step: render the form on a read, apply the
    /// submission on a write.
    ///
    /// Every step after case selection checks the single global
    /// precondition — a started bag — and otherwise redirects to the
    /// start with a notice, leaving the bag untouched. A valid submission
    /// merges its field into the bag (case selection replaces the bag)
    /// and redirects to the next step; an invalid one re-renders the form
    /// with errors and no bag mutation.
    pub fn selection_step(
        &self,
        user: &User,
        session_id: &SessionId,
        step: WizardStep,
        submission: Option<&Submission>,
    ) -> Result<StepResponse, ShopError> {
        require_login(user)?;
        if matches!(step, WizardStep::Summary | WizardStep::OrderPlaced) {
            return Err(CommerceError::UnsupportedSubmission { step: step.as_str() }.into());
        }

        let mut bag = self.sessions.get(session_id)?.unwrap_or_default();
        if step.requires_started() && !bag.started() {
            tracing::debug!(step = step.as_str(), "wizard entered without a started bag");
            return Ok(StepResponse::redirect_with_notice(
                step_route(WizardStep::Case),
                START_OVER_NOTICE,
            ));
        }

        let Some(submission) = submission else {
            return Ok(StepResponse::render(template_for(step), form_context(step, &[])));
        };

        match apply(&mut bag, step, submission) {
            Ok(next) => {
                self.sessions.set(session_id, &bag)?;
                Ok(StepResponse::redirect(step_route(next)))
            }
            Err(err @ (CommerceError::InvalidChoice { .. } | CommerceError::MissingField { .. })) => {
                Ok(StepResponse::render(
                    template_for(step),
                    form_context(step, &[err.to_string()]),
                ))
            }
            Err(other) => Err(other.into()),
        }
    }

    /// The summary step: price preview on a read, order placement on a
    /// write.
    ///
    /// The preview drives the current bag through a fresh builder without
    /// persisting anything. Confirming creates the computer and its
    /// order, clears the whole bag, and redirects to the confirmation
    /// page with the new order's id.
    pub fn summary(
        &self,
        user: &User,
        session_id: &SessionId,
        confirm: bool,
    ) -> Result<StepResponse, ShopError> {
        require_login(user)?;

        let bag = self.sessions.get(session_id)?.unwrap_or_default();
        if !bag.started() {
            return Ok(StepResponse::redirect_with_notice(
                step_route(WizardStep::Case),
                START_OVER_NOTICE,
            ));
        }

        if confirm {
            let input = NewComputerInput::from_session(&bag);
            let computer = self.service.create_computer(user, input)?;
            let order = self.service.place_order(user, &computer)?;
            self.sessions.delete(session_id)?;
            return Ok(StepResponse::redirect(order_success_route(&order.id)));
        }

        let preview = bag.preview();
        Ok(StepResponse::render(
            template_for(WizardStep::Summary),
            json!({
                "summary_line": preview.summary_line(),
                "case_type": preview.case_type,
                "processor": preview.processor,
                "memory": preview.memory_gb,
                "storage": preview.storage_gb,
                "graphics_card": preview.graphics_card,
                "color": preview.color,
                "peripherals": preview.peripherals,
                "is_laptop": preview.is_laptop,
                "estimated_price": preview.price,
                "estimated_price_display": preview.price.display(),
            }),
        ))
    }

    /// Order confirmation page.
    pub fn order_success(
        &self,
        user: &User,
        order_id: &OrderId,
    ) -> Result<StepResponse, ShopError> {
        let (order, computer) = self.service.order_with_details(order_id, user)?;
        Ok(StepResponse::render(
            "shop/order_success.html",
            json!({ "order": order, "computer": computer }),
        ))
    }

    /// The user's orders, newest first, with computer details.
    pub fn my_orders(&self, user: &User) -> Result<StepResponse, ShopError> {
        let enhanced: Vec<serde_json::Value> = self
            .service
            .orders_with_details(user)?
            .into_iter()
            .map(|(order, computer)| json!({ "order": order, "computer": computer }))
            .collect();
        Ok(StepResponse::render(
            "shop/my_orders.html",
            json!({ "enhanced_orders": enhanced }),
        ))
    }

    /// Details page for one order.
    pub fn order_detail(&self, user: &User, order_id: &OrderId) -> Result<StepResponse, ShopError> {
        let (order, computer) = self.service.order_with_details(order_id, user)?;
        Ok(StepResponse::render(
            "shop/order_detail.html",
            json!({ "order": order, "computer": computer }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::{ComputerRepository, OrderRepository};
    use rig_commerce::ids::UserId;
    use rig_commerce::money::Money;
    use rig_store::Store;

    fn wizard() -> Wizard {
        let service = ShopService::new(
            ComputerRepository::new(Store::open("computers")),
            OrderRepository::new(Store::open("orders")),
        );
        let sessions = Session::new(Store::open("sessions"), "computer_builder");
        Wizard::new(service, sessions)
    }

    fn customer() -> User {
        User::authenticated(UserId::new("u1"), "u1@example.com", None)
    }

    fn choice(value: &str) -> Submission {
        Submission::Choice(value.to_string())
    }

    fn assert_redirects_to(response: &StepResponse, expected: &str) {
        match response {
            StepResponse::Redirect { location, .. } => assert_eq!(location, expected),
            other => panic!("expected redirect, got {other:?}"),
        }
    }

    #[test]
    fn test_anonymous_user_is_gated() {
        let wizard = wizard();
        let err = wizard
            .selection_step(
                &User::anonymous("s"),
                &SessionId::new("s"),
                WizardStep::Case,
                None,
            )
            .unwrap_err();
        assert!(matches!(err, ShopError::Auth(_)));
    }

    #[test]
    fn test_case_step_renders_form() {
        let wizard = wizard();
        let response = wizard
            .selection_step(&customer(), &SessionId::new("s"), WizardStep::Case, None)
            .unwrap();
        match response {
            StepResponse::Render { template, context } => {
                assert_eq!(template, "shop/case_selection.html");
                assert_eq!(context["step"], "case");
                assert!(context["choices"].is_array());
            }
            other => panic!("expected render, got {other:?}"),
        }
    }

    #[test]
    fn test_step_without_started_bag_redirects_to_start() {
        let wizard = wizard();
        let sid = SessionId::new("s");

        let response = wizard
            .selection_step(&customer(), &sid, WizardStep::Processor, Some(&choice("i5-12400")))
            .unwrap();
        match response {
            StepResponse::Redirect { location, notice } => {
                assert_eq!(location, "/case/");
                assert_eq!(notice.as_deref(), Some(START_OVER_NOTICE));
            }
            other => panic!("expected redirect, got {other:?}"),
        }

        // The bag was not created or mutated.
        assert!(!wizard.sessions.exists(&sid).unwrap());
    }

    #[test]
    fn test_case_submission_starts_fresh_bag() {
        let wizard = wizard();
        let sid = SessionId::new("s");

        // Leave a stale partial bag behind.
        wizard
            .sessions
            .set(&sid, &{
                let mut bag = BuildSession::start("Tower");
                bag.processor = Some("i9-12900K".to_string());
                bag
            })
            .unwrap();

        let response = wizard
            .selection_step(&customer(), &sid, WizardStep::Case, Some(&choice("Gaming")))
            .unwrap();
        assert_redirects_to(&response, "/processor/");

        let bag = wizard.sessions.get(&sid).unwrap().unwrap();
        assert_eq!(bag.case_type.as_deref(), Some("Gaming"));
        assert_eq!(bag.processor, None);
    }

    #[test]
    fn test_invalid_submission_rerenders_without_mutation() {
        let wizard = wizard();
        let sid = SessionId::new("s");
        wizard.sessions.set(&sid, &BuildSession::start("Gaming")).unwrap();

        let response = wizard
            .selection_step(&customer(), &sid, WizardStep::Processor, Some(&choice("Pentium-4")))
            .unwrap();
        match response {
            StepResponse::Render { template, context } => {
                assert_eq!(template, "shop/processor_selection.html");
                assert!(!context["errors"].as_array().unwrap().is_empty());
            }
            other => panic!("expected render, got {other:?}"),
        }

        let bag = wizard.sessions.get(&sid).unwrap().unwrap();
        assert_eq!(bag.processor, None);
    }

    #[test]
    fn test_valid_submission_merges_and_advances() {
        let wizard = wizard();
        let sid = SessionId::new("s");
        wizard.sessions.set(&sid, &BuildSession::start("Gaming")).unwrap();

        let response = wizard
            .selection_step(&customer(), &sid, WizardStep::Processor, Some(&choice("i7-12700K")))
            .unwrap();
        assert_redirects_to(&response, "/memory/");

        let bag = wizard.sessions.get(&sid).unwrap().unwrap();
        assert_eq!(bag.case_type.as_deref(), Some("Gaming"));
        assert_eq!(bag.processor.as_deref(), Some("i7-12700K"));
    }

    fn run_full_flow(wizard: &Wizard, user: &User, sid: &SessionId) {
        let steps: Vec<(WizardStep, Submission)> = vec![
            (WizardStep::Case, choice("Gaming")),
            (WizardStep::Processor, choice("i7-12700K")),
            (WizardStep::Memory, choice("16")),
            (WizardStep::Storage, choice("1024")),
            (WizardStep::Graphics, choice("RTX-3070")),
            (WizardStep::Color, choice("Black")),
            (
                WizardStep::Peripherals,
                Submission::Peripherals(vec!["keyboard".to_string(), "mouse".to_string()]),
            ),
            (WizardStep::DeviceType, Submission::DeviceType(false)),
        ];
        for (step, submission) in &steps {
            let response = wizard
                .selection_step(user, sid, *step, Some(submission))
                .unwrap();
            assert!(matches!(response, StepResponse::Redirect { .. }));
        }
    }

    #[test]
    fn test_summary_preview_prices_without_persisting() {
        let wizard = wizard();
        let user = customer();
        let sid = SessionId::new("s");
        run_full_flow(&wizard, &user, &sid);

        let response = wizard.summary(&user, &sid, false).unwrap();
        match response {
            StepResponse::Render { template, context } => {
                assert_eq!(template, "shop/summary.html");
                assert_eq!(context["estimated_price_display"], "$1470.00");
                assert_eq!(context["memory"], 16);
            }
            other => panic!("expected render, got {other:?}"),
        }

        // Nothing persisted, bag still intact.
        assert!(wizard.service.orders_for(&user).unwrap().is_empty());
        assert!(wizard.sessions.exists(&sid).unwrap());
    }

    #[test]
    fn test_summary_confirm_places_order_and_clears_bag() {
        let wizard = wizard();
        let user = customer();
        let sid = SessionId::new("s");
        run_full_flow(&wizard, &user, &sid);

        let response = wizard.summary(&user, &sid, true).unwrap();
        let location = match response {
            StepResponse::Redirect { location, .. } => location,
            other => panic!("expected redirect, got {other:?}"),
        };
        assert!(location.starts_with("/success/"));

        // The bag is consumed.
        assert!(!wizard.sessions.exists(&sid).unwrap());

        // The order exists and its computer carries the previewed price.
        let orders = wizard.service.orders_for(&user).unwrap();
        assert_eq!(orders.len(), 1);
        let details = wizard
            .service
            .computer_details(&orders[0].computer_id)
            .unwrap();
        assert_eq!(details.price, Money::from_units(1470));
    }

    #[test]
    fn test_summary_without_started_bag_redirects() {
        let wizard = wizard();
        let response = wizard.summary(&customer(), &SessionId::new("s"), false).unwrap();
        match response {
            StepResponse::Redirect { location, notice } => {
                assert_eq!(location, "/case/");
                assert!(notice.is_some());
            }
            other => panic!("expected redirect, got {other:?}"),
        }
    }

    #[test]
    fn test_order_pages() {
        let wizard = wizard();
        let user = customer();
        let sid = SessionId::new("s");
        run_full_flow(&wizard, &user, &sid);
        wizard.summary(&user, &sid, true).unwrap();

        let order = wizard.service.orders_for(&user).unwrap().remove(0);

        let response = wizard.order_success(&user, &order.id).unwrap();
        assert!(matches!(
            response,
            StepResponse::Render { template: "shop/order_success.html", .. }
        ));

        let response = wizard.my_orders(&user).unwrap();
        match response {
            StepResponse::Render { template, context } => {
                assert_eq!(template, "shop/my_orders.html");
                assert_eq!(context["enhanced_orders"].as_array().unwrap().len(), 1);
            }
            other => panic!("expected render, got {other:?}"),
        }

        let response = wizard.order_detail(&user, &order.id).unwrap();
        assert!(matches!(
            response,
            StepResponse::Render { template: "shop/order_detail.html", .. }
        ));

        // Another user cannot see the order.
        let stranger = User::authenticated(UserId::new("u2"), "u2@example.com", None);
        let err = wizard.order_detail(&stranger, &order.id).unwrap_err();
        assert!(matches!(err, ShopError::OrderNotFound(_)));
    }

    #[test]
    fn test_skipping_to_summary_uses_defaults() {
        let wizard = wizard();
        let user = customer();
        let sid = SessionId::new("s");

        // Only the case step was completed; the permissive guard lets the
        // summary render with defaulted sizes.
        wizard
            .selection_step(&user, &sid, WizardStep::Case, Some(&choice("Mini")))
            .unwrap();

        let response = wizard.summary(&user, &sid, false).unwrap();
        match response {
            StepResponse::Render { context, .. } => {
                assert_eq!(context["memory"], 8);
                assert_eq!(context["storage"], 512);
            }
            other => panic!("expected render, got {other:?}"),
        }
    }

    #[test]
    fn test_index_renders() {
        let wizard = wizard();
        let response = wizard.index(&customer()).unwrap();
        assert!(matches!(
            response,
            StepResponse::Render { template: "shop/index.html", .. }
        ));
    }
}
