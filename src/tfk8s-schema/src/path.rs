use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
    Attribute(String),
    ElementKey(String),
    ElementIndex(usize),
}

/// Location of a value inside a resource, e.g.
/// `spec.template.spec.containers[0].ports[1].container_port`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributePath(Vec<PathStep>);

impl AttributePath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.0
    }

    pub fn attribute(&self, name: &str) -> Self {
        self.with(PathStep::Attribute(name.to_owned()))
    }

    pub fn key(&self, key: &str) -> Self {
        self.with(PathStep::ElementKey(key.to_owned()))
    }

    pub fn index(&self, index: usize) -> Self {
        self.with(PathStep::ElementIndex(index))
    }

    fn with(&self, step: PathStep) -> Self {
        let mut steps = self.0.clone();
        steps.push(step);
        Self(steps)
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return write!(f, "<root>");
        }
        for (position, step) in self.0.iter().enumerate() {
            match step {
                PathStep::Attribute(name) if position == 0 => write!(f, "{}", name)?,
                PathStep::Attribute(name) => write!(f, ".{}", name)?,
                PathStep::ElementKey(key) => write!(f, "[{:?}]", key)?,
                PathStep::ElementIndex(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {

    use super::AttributePath;

    #[test]
    fn test_display() {
        let path = AttributePath::root()
            .attribute("spec")
            .attribute("containers")
            .index(0)
            .attribute("ports");
        assert_eq!(path.to_string(), "spec.containers[0].ports");

        let labels = AttributePath::root()
            .attribute("metadata")
            .attribute("labels")
            .key("app");
        assert_eq!(labels.to_string(), r#"metadata.labels["app"]"#);
        assert_eq!(AttributePath::root().to_string(), "<root>");
    }
}
