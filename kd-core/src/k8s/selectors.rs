use kube::api::ListParams;
use tracing::warn;

use crate::prelude::*;

// The meanings of these operators is explained here:
// https://kubernetes.io/docs/concepts/overview/working-with-objects/labels/#set-based-requirement
const OPERATOR_IN: &str = "In";
const OPERATOR_NOT_IN: &str = "NotIn";
const OPERATOR_EXISTS: &str = "Exists";
const OPERATOR_DOES_NOT_EXIST: &str = "DoesNotExist";

// Everything carrying the marker label, i.e., the objects we created
pub fn duplicated_list_params() -> ListParams {
    ListParams::default().labels(&format!("{DUPLICATED_LABEL_KEY}={DUPLICATED_LABEL_VALUE}"))
}

// The inverse query: objects eligible to be duplicated (a clone is never
// itself duplicable)
pub fn duplicable_list_params() -> ListParams {
    ListParams::default().labels(&format!("!{DUPLICATED_LABEL_KEY}"))
}

// Render a LabelSelector into the string form the list endpoints accept;
// used to look up the pods owned by a freshly created Deployment or
// StatefulSet clone via its selector.
pub fn format_label_selector(sel: &metav1::LabelSelector) -> String {
    let mut parts = vec![];
    if let Some(labels) = &sel.match_labels {
        for (k, v) in labels {
            parts.push(format!("{k}={v}"));
        }
    }
    if let Some(exprs) = &sel.match_expressions {
        for expr in exprs {
            let values = expr.values.clone().unwrap_or_default().join(",");
            match expr.operator.as_str() {
                OPERATOR_IN => parts.push(format!("{} in ({values})", expr.key)),
                OPERATOR_NOT_IN => parts.push(format!("{} notin ({values})", expr.key)),
                OPERATOR_EXISTS => parts.push(expr.key.clone()),
                OPERATOR_DOES_NOT_EXIST => parts.push(format!("!{}", expr.key)),
                op => warn!("skipping label selector expression with unknown operator {op:?}"),
            }
        }
    }
    parts.join(",")
}
