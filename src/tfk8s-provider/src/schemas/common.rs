use tfk8s_schema::Attribute;
use tfk8s_schema::Attributes;
use tfk8s_schema::Validator;

pub fn object_meta(name_spaced: bool) -> Attributes {
    let meta = Attributes::new()
        .with(
            "name",
            Attribute::string("Name must be unique within a namespace.").validate(Validator::Name),
        )
        .with(
            "generate_name",
            Attribute::string("Optional prefix used by the server to generate a unique name."),
        )
        .with(
            "labels",
            Attribute::string_map("Map of string keys and values used to organize and categorize objects.")
                .validate(Validator::Labels),
        )
        .with(
            "annotations",
            Attribute::string_map("Unstructured key value map stored with a resource.")
                .validate(Validator::Annotations),
        )
        .with(
            "finalizers",
            Attribute::string_list("Must be empty before the object is deleted from the registry."),
        )
        .with(
            "owner_references",
            Attribute::list_nested(owner_reference(), "List of objects depended by this object."),
        )
        .with(
            "creation_timestamp",
            Attribute::string("Timestamp representing the server time when this object was created.")
                .validate(Validator::DateTime),
        );

    if name_spaced {
        meta.with(
            "namespace",
            Attribute::string("Namespace defines the space within which each name must be unique.")
                .validate(Validator::LabelName),
        )
    } else {
        meta
    }
}

fn owner_reference() -> Attributes {
    Attributes::new()
        .with("api_version", Attribute::string("API version of the referent.").required())
        .with("kind", Attribute::string("Kind of the referent.").required())
        .with(
            "name",
            Attribute::string("Name of the referent.")
                .required()
                .validate(Validator::Name),
        )
        .with("uid", Attribute::string("UID of the referent.").required())
        .with(
            "controller",
            Attribute::bool("If true, this reference points to the managing controller."),
        )
        .with(
            "block_owner_deletion",
            Attribute::bool("If true, the owner cannot be deleted before this reference is removed."),
        )
}

/// label query over a set of resources
pub fn label_selector() -> Attributes {
    let requirement = Attributes::new()
        .with(
            "key",
            Attribute::string("The label key that the selector applies to.").required(),
        )
        .with(
            "operator",
            Attribute::string("Represents a key's relationship to a set of values.")
                .required()
                .validate(Validator::OneOf(&["In", "NotIn", "Exists", "DoesNotExist"])),
        )
        .with("values", Attribute::string_list("An array of string values."));

    Attributes::new()
        .with(
            "match_labels",
            Attribute::string_map("Map of {key,value} pairs, each one equivalent to an In requirement.")
                .validate(Validator::Labels),
        )
        .with(
            "match_expressions",
            Attribute::list_nested(requirement, "List of label selector requirements, ANDed."),
        )
}

pub fn local_object_reference() -> Attributes {
    Attributes::new().with(
        "name",
        Attribute::string("Name of the referent.").validate(Validator::Name),
    )
}

pub fn object_field_selector() -> Attributes {
    Attributes::new()
        .with(
            "api_version",
            Attribute::string("Version of the schema the field_path is written in terms of."),
        )
        .with(
            "field_path",
            Attribute::string("Path of the field to select in the specified API version.").required(),
        )
}

/// metadata of objects embedded in templates, name is optional there
pub fn template_meta() -> Attributes {
    object_meta(true)
}

#[cfg(test)]
mod test {

    use super::{label_selector, object_meta};

    #[test]
    fn test_object_meta_scope() {
        assert!(object_meta(true).contains("namespace"));
        assert!(!object_meta(false).contains("namespace"));
        assert!(!object_meta(false).get("name").expect("name").required);
    }

    #[test]
    fn test_selector_operator_values() {
        let selector = label_selector();
        assert!(selector.contains("match_labels"));
        assert!(selector.contains("match_expressions"));
    }
}
