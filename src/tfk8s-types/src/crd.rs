/// API group, version and names of a Kubernetes kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crd {
    pub group: &'static str,
    pub version: &'static str,
    pub names: CrdNames,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrdNames {
    pub kind: &'static str,
}

impl Crd {
    /// group "core" is the legacy group, its apiVersion is the bare version
    pub fn api_version(&self) -> String {
        if self.is_core() {
            return self.version.to_owned();
        }
        format!("{}/{}", self.group, self.version)
    }

    pub fn is_core(&self) -> bool {
        self.group == "core"
    }
}

#[cfg(test)]
mod test {

    use super::{Crd, CrdNames};

    const TEST_API: Crd = Crd {
        group: "example.io",
        version: "v1beta1",
        names: CrdNames {
            kind: "Widget",
        },
    };

    #[test]
    fn test_api_version() {
        assert_eq!(TEST_API.api_version(), "example.io/v1beta1");

        let core = Crd {
            group: "core",
            ..TEST_API
        };
        assert!(core.is_core());
        assert_eq!(core.api_version(), "v1beta1");
    }
}
