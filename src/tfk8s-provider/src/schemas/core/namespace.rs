use tfk8s_schema::Attribute;
use tfk8s_schema::Attributes;
use tfk8s_types::core::namespace::NamespaceSpec;

use crate::ResourceKind;

impl ResourceKind for NamespaceSpec {
    const DESCRIPTION: &'static str = "Namespace provides a scope for names.";

    fn body_attributes() -> Attributes {
        let spec = Attributes::new().with(
            "finalizers",
            Attribute::string_list("Values that must be empty to permanently remove the namespace."),
        );
        Attributes::new().with(
            "spec",
            Attribute::single_nested(spec, "Spec defines the behavior of the Namespace."),
        )
    }
}
