//! Manual dispatch trigger validation.
//!
//! The smoke workflow is started by hand with a git ref to build, so the
//! `on` section must declare `workflow_dispatch` with a string `ref` input.

use crate::lint::document::{Node, TRIGGER_KEY};
use crate::lint::{DiagnosticSink, LintContext, LintDiagnostic, LintRule, RuleId, Severity};

const DISPATCH_KEY: &str = "workflow_dispatch";
const REF_INPUT: &str = "ref";

/// How `workflow_dispatch` shows up in the trigger section.
enum Dispatch<'a> {
    Missing,
    /// Named in the scalar or list form of `on`, so it cannot carry inputs.
    Bare,
    Declared(Node<'a>),
}

fn find_dispatch(trigger: Node<'_>) -> Dispatch<'_> {
    match trigger {
        Node::Mapping(_) => match trigger.get(DISPATCH_KEY) {
            Node::Absent => Dispatch::Missing,
            node => Dispatch::Declared(node),
        },
        Node::Sequence(_) if trigger.items().any(|n| n.as_str() == Some(DISPATCH_KEY)) => {
            Dispatch::Bare
        }
        Node::Scalar(_) if trigger.as_str() == Some(DISPATCH_KEY) => Dispatch::Bare,
        _ => Dispatch::Missing,
    }
}

/// Validates the `workflow_dispatch` trigger and its `ref` input.
pub struct DispatchTriggerRule;

impl LintRule for DispatchTriggerRule {
    fn id(&self) -> RuleId {
        RuleId::new("dispatch-trigger")
    }

    fn name(&self) -> &str {
        "Dispatch Trigger"
    }

    fn description(&self) -> &str {
        "Ensures the workflow is manually dispatchable with a string 'ref' input"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, ctx: &LintContext<'_>, sink: &mut DiagnosticSink) {
        let section = match find_dispatch(ctx.document.get(TRIGGER_KEY)) {
            Dispatch::Missing => {
                sink.push(
                    LintDiagnostic::new(
                        self.id(),
                        self.default_severity(),
                        "Missing 'workflow_dispatch' trigger",
                    )
                    .with_suggestion("Add `workflow_dispatch:` under `on:`"),
                );
                return;
            }
            Dispatch::Bare => None,
            Dispatch::Declared(Node::Mapping(m)) if !m.is_empty() => {
                Some(Node::Mapping(m))
            }
            Dispatch::Declared(_) => None,
        };

        let Some(section) = section else {
            sink.warning(self.id(), "workflow_dispatch has no inputs defined");
            return;
        };

        let ref_input = section.get("inputs").get(REF_INPUT);
        if ref_input.is_absent() {
            sink.warning(self.id(), "workflow_dispatch missing 'ref' input");
        } else if ref_input.get("type").as_str() != Some("string") {
            sink.warning(self.id(), "'ref' input should be of type 'string'");
        }
    }
}
