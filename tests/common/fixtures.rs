use serde_json::{Value, json};

/// A full-viewport column whose children grow by `weights`.
pub fn weighted_column(weights: &[f32], gap: f32) -> Value {
    let children: Vec<Value> = weights
        .iter()
        .enumerate()
        .map(|(i, w)| json!({ "name": format!("item{i}"), "style": { "flexGrow": w } }))
        .collect();
    json!({
        "name": "root",
        "style": { "gap": gap, "alignItems": "stretch" },
        "children": children
    })
}

/// A small application shell: header, a sidebar/content row and a footer.
pub fn app_shell() -> Value {
    json!({
        "name": "root",
        "style": { "alignItems": "stretch" },
        "children": [
            { "name": "header", "css": "height: 48; padding: 8 16; flex-direction: row; align-items: center",
              "children": [ { "name": "title", "text": "Dashboard" } ] },
            { "name": "body", "css": "flex-grow: 1; flex-direction: row; align-items: stretch",
              "children": [
                  { "name": "sidebar", "css": "width: 200; padding: 8; gap: 4; align-items: stretch",
                    "children": [
                        { "name": "nav0", "text": "Overview" },
                        { "name": "nav1", "text": "Reports" }
                    ] },
                  { "name": "content", "css": "flex-grow: 1; overflow-y: auto; padding: 16",
                    "children": [
                        { "name": "card0", "css": "height: 300; width: 100%" },
                        { "name": "card1", "css": "height: 300; width: 100%" }
                    ] }
              ] },
            { "name": "footer", "css": "height: 24" }
        ]
    })
}
