//! Route templates for span fields and metric labels.

use uuid::Uuid;

/// Replace UUID path segments with `{uuid}` so one route maps to one label.
pub(super) fn route_template(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut template = String::from("/");

    for (index, segment) in path.trim_start_matches('/').split('/').enumerate() {
        if index > 0 {
            template.push('/');
        }

        if Uuid::parse_str(segment).is_ok() {
            template.push_str("{uuid}");
        } else {
            template.push_str(segment);
        }
    }

    template
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_segments_are_replaced() {
        let path = format!(
            "/products/{}/variations/{}/stock",
            Uuid::now_v7(),
            Uuid::now_v7()
        );

        assert_eq!(
            route_template(&path),
            "/products/{uuid}/variations/{uuid}/stock"
        );
    }

    #[test]
    fn static_paths_are_unchanged() {
        assert_eq!(route_template("/"), "/");
        assert_eq!(
            route_template("/products/bulk-stock-update"),
            "/products/bulk-stock-update"
        );
    }
}
