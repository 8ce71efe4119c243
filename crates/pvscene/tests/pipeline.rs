//! End-to-end pipeline tests: XML in, serialized scene items out.

use pvscene::process_pvs;
use serde_json::json;

const GOLDEN_PVS: &str = r#"<PV_FILE>
    <section_structure>
        <component name="PN0">
            <shape_source file_name="PN0.ol"/>
        </component>
        <component name="PN1">
            <shape_source file_name="PN1.ol"/>
        </component>
        <component name="Assembly">
            <component_instance index="0" origOccId="inst0"/>
            <component_instance index="1" origOccId="inst1"/>
        </component>
    </section_structure>
</PV_FILE>"#;

#[test]
fn golden_assembly_produces_three_items() {
    let items = process_pvs(GOLDEN_PVS, None, None).unwrap();
    let actual = serde_json::to_value(&items).unwrap();
    assert_eq!(
        actual,
        json!([
            {
                "depth": 0,
                "suppliedId": "/",
            },
            {
                "depth": 1,
                "parentId": "/",
                "source": {
                    "fileName": "PN0.ol",
                    "suppliedPartId": "PN0",
                    "suppliedRevisionId": "1",
                },
                "suppliedId": "/inst0",
            },
            {
                "depth": 1,
                "parentId": "/",
                "source": {
                    "fileName": "PN1.ol",
                    "suppliedPartId": "PN1",
                    "suppliedRevisionId": "1",
                },
                "suppliedId": "/inst1",
            },
        ])
    );
}

#[test]
fn explicit_root_matches_default_root() {
    let by_default = process_pvs(GOLDEN_PVS, None, None).unwrap();
    let by_name = process_pvs(GOLDEN_PVS, Some("Assembly"), None).unwrap();
    assert_eq!(by_default, by_name);
}

#[test]
fn revision_property_resolves_from_sections() {
    let xml = r#"<PV_FILE>
        <section_structure>
            <component name="PN0">
                <shape_source file_name="PN0.ol"/>
            </component>
            <component name="Assembly">
                <component_instance index="0" origOccId="inst0"/>
            </component>
        </section_structure>
        <section_properties>
            <property_component_ref>
                <property name="REVISION" value="C.4"/>
            </property_component_ref>
            <property_component_ref/>
        </section_properties>
    </PV_FILE>"#;

    let items = process_pvs(xml, None, Some("REVISION")).unwrap();
    let source = items[1].source.as_ref().unwrap();
    assert_eq!(source.supplied_revision_id, "C.4");

    // Without the property name the lookup is skipped entirely.
    let items = process_pvs(xml, None, None).unwrap();
    let source = items[1].source.as_ref().unwrap();
    assert_eq!(source.supplied_revision_id, "1");
}

#[test]
fn translated_instance_carries_scaled_transform() {
    let xml = r#"<PV_FILE>
        <section_structure>
            <component name="PN0">
                <shape_source file_name="PN0.ol"/>
            </component>
            <component name="Assembly">
                <component_instance index="0" origOccId="inst0"
                    translation="1000,2000,3000"/>
            </component>
        </section_structure>
    </PV_FILE>"#;

    let items = process_pvs(xml, None, None).unwrap();
    let t = items[1].transform.unwrap();
    // Row-major affine with translation divided by 1000.
    assert_eq!(t[3], 1.0);
    assert_eq!(t[7], 2.0);
    assert_eq!(t[11], 3.0);
    assert_eq!(&t[12..], [0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn empty_structure_is_an_error() {
    let xml = "<PV_FILE><section_structure/></PV_FILE>";
    assert!(process_pvs(xml, None, None).is_err());
}
