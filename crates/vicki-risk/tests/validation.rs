use vicki_risk::{Field, FieldIssue, Problem, Race, RiskInput, Sex, compute_risk};

fn complete() -> RiskInput {
    RiskInput {
        age: Some(55),
        sex: Some(Sex::Male),
        total_cholesterol: Some(213.0),
        hdl_cholesterol: Some(50.0),
        systolic_blood_pressure: Some(120.0),
        is_smoker: false,
        has_diabetes: false,
        on_hypertension_treatment: false,
        race: Some(Race::White),
    }
}

#[test]
fn complete_input_validates() {
    let factors = complete().validate().unwrap();
    assert_eq!(factors.age(), 55);
    assert_eq!(factors.sex(), Sex::Male);
    assert_eq!(factors.race(), Race::White);
}

#[test]
fn missing_race_is_reported_by_name() {
    let mut input = complete();
    input.race = None;

    let err = compute_risk(&input).unwrap_err();
    assert_eq!(err.issues, vec![FieldIssue::missing(Field::Race)]);
    assert!(err.mentions(Field::Race));
    assert!(err.to_string().contains("race"));
}

#[test]
fn each_required_field_is_checked() {
    let clears: [(Field, fn(&mut RiskInput)); 6] = [
        (Field::Age, |i: &mut RiskInput| i.age = None),
        (Field::Sex, |i: &mut RiskInput| i.sex = None),
        (Field::TotalCholesterol, |i: &mut RiskInput| i.total_cholesterol = None),
        (Field::HdlCholesterol, |i: &mut RiskInput| i.hdl_cholesterol = None),
        (Field::SystolicBloodPressure, |i: &mut RiskInput| i.systolic_blood_pressure = None),
        (Field::Race, |i: &mut RiskInput| i.race = None),
    ];

    for (field, clear) in clears {
        let mut input = complete();
        clear(&mut input);
        let err = input.validate().unwrap_err();
        assert_eq!(err.missing_fields(), vec![field]);
    }
}

#[test]
fn all_missing_fields_are_collected_in_form_order() {
    let err = RiskInput::default().validate().unwrap_err();
    assert_eq!(
        err.missing_fields(),
        vec![
            Field::Age,
            Field::Sex,
            Field::TotalCholesterol,
            Field::HdlCholesterol,
            Field::SystolicBloodPressure,
            Field::Race,
        ]
    );
}

#[test]
fn flags_are_optional() {
    let json = r#"{
        "age": 55,
        "sex": "male",
        "totalCholesterol": 213,
        "hdlCholesterol": 50,
        "systolicBloodPressure": 120,
        "race": "white"
    }"#;
    let input: RiskInput = serde_json::from_str(json).unwrap();
    assert!(!input.is_smoker && !input.has_diabetes && !input.on_hypertension_treatment);
    assert_eq!(input, complete());
}

#[test]
fn form_labels_are_accepted_on_the_wire() {
    let json = r#"{
        "age": 61,
        "sex": "Female",
        "totalCholesterol": 200,
        "hdlCholesterol": 60,
        "systolicBloodPressure": 130,
        "race": "African American"
    }"#;
    let input: RiskInput = serde_json::from_str(json).unwrap();
    assert_eq!(input.sex, Some(Sex::Female));
    assert_eq!(input.race, Some(Race::AfricanAmerican));
}

#[test]
fn age_outside_range_is_invalid() {
    for age in [0, 39, 76, 120] {
        let mut input = complete();
        input.age = Some(age);
        let err = input.validate().unwrap_err();
        assert_eq!(err.fields(), vec![Field::Age]);
        assert!(matches!(err.issues[0].problem, Problem::Invalid(_)));
        assert!(err.missing_fields().is_empty());
    }

    for age in [40, 75] {
        let mut input = complete();
        input.age = Some(age);
        assert!(input.validate().is_ok(), "age {age} is in range");
    }
}

#[test]
fn non_positive_measurements_are_invalid() {
    let mut input = complete();
    input.total_cholesterol = Some(0.0);
    input.hdl_cholesterol = Some(-5.0);
    input.systolic_blood_pressure = Some(f64::NAN);

    let err = input.validate().unwrap_err();
    assert_eq!(
        err.fields(),
        vec![
            Field::TotalCholesterol,
            Field::HdlCholesterol,
            Field::SystolicBloodPressure,
        ]
    );
    assert!(err.to_string().contains("hdlCholesterol must be greater than zero"));
}

#[test]
fn error_serializes_with_field_names() {
    let mut input = complete();
    input.race = None;
    input.age = Some(30);

    let err = input.validate().unwrap_err();
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["issues"][0]["field"], "age");
    assert_eq!(json["issues"][0]["problem"]["kind"], "invalid");
    assert_eq!(json["issues"][1]["field"], "race");
    assert_eq!(json["issues"][1]["problem"]["kind"], "missing");
}

#[test]
fn blank_strings_on_the_wire_count_as_missing() {
    let json = r#"{
        "age": "",
        "sex": "  ",
        "totalCholesterol": 213,
        "hdlCholesterol": "",
        "systolicBloodPressure": 120,
        "race": ""
    }"#;
    let input: RiskInput = serde_json::from_str(json).unwrap();
    assert_eq!(input.age, None);
    assert_eq!(input.sex, None);
    assert_eq!(input.hdl_cholesterol, None);
    assert_eq!(input.race, None);

    let err = compute_risk(&input).unwrap_err();
    assert_eq!(
        err.missing_fields(),
        vec![Field::Age, Field::Sex, Field::HdlCholesterol, Field::Race]
    );
}

#[test]
fn null_and_unknown_values_on_the_wire() {
    let input: RiskInput = serde_json::from_str(r#"{"race": null, "sex": null}"#).unwrap();
    assert_eq!(input.race, None);
    assert_eq!(input.sex, None);

    assert!(serde_json::from_str::<RiskInput>(r#"{"race": "martian"}"#).is_err());
    assert!(serde_json::from_str::<RiskInput>(r#"{"age": "old"}"#).is_err());
}

#[test]
fn every_rejection_names_at_least_one_field() {
    let mut inputs = vec![RiskInput::default()];
    for age in [0, 39, 76] {
        let mut input = complete();
        input.age = Some(age);
        inputs.push(input);
    }
    let mut input = complete();
    input.systolic_blood_pressure = Some(f64::INFINITY);
    inputs.push(input);

    for input in inputs {
        let err = input.validate().unwrap_err();
        assert!(!err.issues.is_empty(), "{input:?}");
        assert!(!err.to_string().is_empty());
    }
}
