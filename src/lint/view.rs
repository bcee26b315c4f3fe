//! Read-only projections over jobs and steps.

use super::document::Node;

/// One job of the workflow.
#[derive(Debug, Clone, Copy)]
pub struct JobView<'a> {
    node: Node<'a>,
}

impl<'a> JobView<'a> {
    pub fn new(node: Node<'a>) -> Self {
        Self { node }
    }

    /// The `runs-on` value.
    pub fn runs_on(&self) -> Node<'a> {
        self.node.get("runs-on")
    }

    /// Declared dependencies; a single `needs: x` is a one-element list.
    pub fn needs(&self) -> Vec<String> {
        self.node.get("needs").string_list()
    }

    /// Steps in declaration order.
    pub fn steps(&self) -> impl Iterator<Item = StepView<'a>> {
        self.node.get("steps").items().map(StepView::new)
    }

    /// Whether any step's `uses` contains `action`.
    pub fn uses_action(&self, action: &str) -> bool {
        self.steps().any(|step| step.uses().contains(action))
    }

    /// Whether any step's `run` contains `token`.
    pub fn runs_command(&self, token: &str) -> bool {
        self.steps().any(|step| step.run().contains(token))
    }

    /// All `run` texts joined by a space.
    pub fn run_text(&self) -> String {
        self.steps()
            .map(|step| step.run())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One step of a job.
#[derive(Debug, Clone, Copy)]
pub struct StepView<'a> {
    node: Node<'a>,
}

impl<'a> StepView<'a> {
    pub fn new(node: Node<'a>) -> Self {
        Self { node }
    }

    /// The `uses` reference, or an empty string.
    pub fn uses(&self) -> String {
        self.node.get("uses").text()
    }

    /// The `run` script, or an empty string.
    pub fn run(&self) -> String {
        self.node.get("run").text()
    }

    /// A parameter from the step's `with` block.
    pub fn with_param(&self, name: &str) -> Node<'a> {
        self.node.get("with").get(name)
    }
}

#[cfg(test)]
mod tests {
    use crate::lint::WorkflowDocument;

    const JOBS: &str = r#"
jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - uses: actions/setup-java@v4
        with:
          java-version: 17
      - run: ./gradlew assembleDebug
      - name: no uses or run
  smoke:
    needs: [build, lint]
    steps: not-a-list
"#;

    #[test]
    fn steps_in_order() {
        let doc = WorkflowDocument::parse(JOBS).unwrap();
        let build = doc.job("build").unwrap();

        let uses: Vec<String> = build.steps().map(|s| s.uses()).collect();
        assert_eq!(
            uses,
            vec!["actions/checkout@v4", "actions/setup-java@v4", "", ""]
        );
    }

    #[test]
    fn step_queries() {
        let doc = WorkflowDocument::parse(JOBS).unwrap();
        let build = doc.job("build").unwrap();

        assert!(build.uses_action("actions/checkout"));
        assert!(!build.uses_action("actions/upload-artifact"));
        assert!(build.runs_command("gradlew"));
        assert_eq!(build.run_text(), "  ./gradlew assembleDebug ");
        assert_eq!(build.runs_on().text(), "ubuntu-latest");
    }

    #[test]
    fn with_param_reads_numbers_as_text() {
        let doc = WorkflowDocument::parse(JOBS).unwrap();
        let build = doc.job("build").unwrap();

        let versions: Vec<String> = build
            .steps()
            .map(|s| s.with_param("java-version").text())
            .filter(|v| !v.is_empty())
            .collect();
        assert_eq!(versions, vec!["17"]);
    }

    #[test]
    fn needs_list_and_non_list_steps() {
        let doc = WorkflowDocument::parse(JOBS).unwrap();
        let smoke = doc.job("smoke").unwrap();

        assert_eq!(smoke.needs(), vec!["build", "lint"]);
        assert_eq!(smoke.steps().count(), 0);
        assert!(smoke.runs_on().is_absent());
    }
}
