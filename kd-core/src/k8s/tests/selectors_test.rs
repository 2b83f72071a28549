use super::*;

#[rstest]
fn test_duplicated_list_params() {
    let lp = duplicated_list_params();
    assert_eq!(lp.label_selector.unwrap(), format!("{DUPLICATED_LABEL_KEY}={DUPLICATED_LABEL_VALUE}"));
}

#[rstest]
fn test_duplicable_list_params() {
    let lp = duplicable_list_params();
    assert_eq!(lp.label_selector.unwrap(), format!("!{DUPLICATED_LABEL_KEY}"));
}

#[rstest]
fn test_format_label_selector_match_labels() {
    let sel = metav1::LabelSelector {
        match_labels: klabel!("app" => "nginx", "tier" => "web"),
        ..Default::default()
    };
    assert_eq!(format_label_selector(&sel), "app=nginx,tier=web");
}

#[rstest]
#[case::op_in("In", Some(vec!["a".into(), "b".into()]), "env in (a,b)")]
#[case::op_not_in("NotIn", Some(vec!["a".into()]), "env notin (a)")]
#[case::op_exists("Exists", None, "env")]
#[case::op_does_not_exist("DoesNotExist", None, "!env")]
fn test_format_label_selector_expressions(
    #[case] op: &str,
    #[case] values: Option<Vec<String>>,
    #[case] expected: &str,
) {
    let sel = metav1::LabelSelector {
        match_expressions: Some(vec![metav1::LabelSelectorRequirement {
            key: "env".into(),
            operator: op.into(),
            values,
        }]),
        ..Default::default()
    };
    assert_eq!(format_label_selector(&sel), expected);
}

#[rstest]
fn test_format_label_selector_combined() {
    let sel = metav1::LabelSelector {
        match_labels: klabel!("app" => "nginx"),
        match_expressions: Some(vec![metav1::LabelSelectorRequirement {
            key: "env".into(),
            operator: "Exists".into(),
            values: None,
        }]),
    };
    assert_eq!(format_label_selector(&sel), "app=nginx,env");
}
