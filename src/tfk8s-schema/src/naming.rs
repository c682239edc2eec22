/// `service_account_name` -> `serviceAccountName`
pub fn snake_to_camel(name: &str) -> String {
    let mut camel = String::with_capacity(name.len());
    let mut upper_next = false;
    for ch in name.chars() {
        if ch == '_' {
            upper_next = !camel.is_empty();
        } else if upper_next {
            camel.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            camel.push(ch);
        }
    }
    camel
}

/// `StatefulSet` -> `stateful_set`, `HTTPRoute` -> `http_route`
pub fn camel_to_snake(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut snake = String::with_capacity(name.len() + 4);
    for (position, ch) in chars.iter().enumerate() {
        if ch.is_uppercase() && position > 0 {
            let prev = chars[position - 1];
            let next_is_lower = chars
                .get(position + 1)
                .map(|next| next.is_lowercase())
                .unwrap_or(false);
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                snake.push('_');
            }
        }
        snake.extend(ch.to_lowercase());
    }
    snake
}

#[cfg(test)]
mod test {

    use super::{camel_to_snake, snake_to_camel};

    #[test]
    fn test_snake_to_camel() {
        assert_eq!(snake_to_camel("name"), "name");
        assert_eq!(snake_to_camel("service_account_name"), "serviceAccountName");
        assert_eq!(
            snake_to_camel("required_during_scheduling_ignored_during_execution"),
            "requiredDuringSchedulingIgnoredDuringExecution"
        );
    }

    #[test]
    fn test_camel_to_snake() {
        assert_eq!(camel_to_snake("Pod"), "pod");
        assert_eq!(camel_to_snake("StatefulSet"), "stateful_set");
        assert_eq!(camel_to_snake("PersistentVolumeClaim"), "persistent_volume_claim");
        assert_eq!(camel_to_snake("HTTPRoute"), "http_route");
    }
}
