//! Round-trip fidelity of generated configuration documents.

use std::collections::BTreeMap;

use proptest::prelude::*;

fn key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,11}"
}

fn name_on_file() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,15}"
}

fn scal() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![Just(None), (-1.0e12f64..1.0e12f64).prop_map(Some), Just(Some(1.0e9))]
}

type Vars = BTreeMap<String, (String, Option<f64>)>;

fn document() -> impl Strategy<Value = BTreeMap<String, (String, Vars)>> {
    let vars = prop::collection::btree_map(key(), (name_on_file(), scal()), 0..5);
    let group = ("[a-z]{1,8}://[a-z.]{1,20}/[a-z_0-9]{1,20}", vars);
    prop::collection::btree_map(key(), group, 1..4)
}

fn render(doc: &BTreeMap<String, (String, Vars)>) -> String {
    let mut out = String::new();
    for (group, (template, vars)) in doc {
        out.push_str(&format!("'{}':\n  template: '{}'\n  vars:", group, template));
        if vars.is_empty() {
            out.push_str(" {}\n");
            continue;
        }
        out.push('\n');
        for (key, (name, scal)) in vars {
            out.push_str(&format!("    '{}':\n      name_on_file: '{}'\n", key, name));
            if let Some(scal) = scal {
                out.push_str(&format!("      scal: {:e}\n", scal));
            }
        }
    }
    out
}

proptest! {
    #[test]
    fn parsed_values_equal_written_values(doc in document()) {
        let parsed = cfobs::parse_config_content(&render(&doc), "generated.yml").unwrap();
        prop_assert_eq!(parsed.len(), doc.len());

        for (group_name, (template, vars)) in &doc {
            let group = cfobs::get_group(&parsed, group_name).unwrap();
            prop_assert_eq!(cfobs::resolved_template(group), template.as_str());
            prop_assert_eq!(group.vars.len(), vars.len());

            for (key, (name, scal)) in vars {
                let spec = cfobs::get_variable(&parsed, group_name, key).unwrap();
                prop_assert_eq!(&spec.name_on_file, name);
                prop_assert_eq!(spec.scal, scal.unwrap_or(1.0));
            }
        }
    }

    #[test]
    fn omitted_scal_never_changes_values(raw in -1.0e6f64..1.0e6f64) {
        let doc = cfobs::parse_config_content(
            "met:\n  template: t\n  vars:\n    ps:\n      name_on_file: PS\n",
            "inline.yml",
        )
        .unwrap();
        let spec = cfobs::get_variable(&doc, "met", "ps").unwrap();
        prop_assert_eq!(spec.apply_scale(raw), raw);
    }
}
