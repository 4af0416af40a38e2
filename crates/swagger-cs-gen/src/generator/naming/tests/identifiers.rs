use crate::generator::naming::identifiers::{
  clean_reference, strip_newlines, to_backing_field_name, to_camel_case, to_namespace, to_parameter_name,
  to_pascal_case, to_title_case,
};

#[test]
fn test_pascal_case() {
  assert_eq!(to_pascal_case("create_match"), "CreateMatch");
  assert_eq!(to_pascal_case("match_create_request"), "MatchCreateRequest");
  assert_eq!(to_pascal_case("healthcheck"), "Healthcheck");
  assert_eq!(to_pascal_case("x"), "X");
  assert_eq!(to_pascal_case("list_user_groups2"), "ListUserGroups2");
}

#[test]
fn test_camel_case() {
  assert_eq!(to_camel_case("create_match"), "createMatch");
  assert_eq!(to_camel_case("match_create_request"), "matchCreateRequest");
  assert_eq!(to_camel_case("CreateMatch"), "createMatch");
  assert_eq!(to_camel_case("X"), "x");
}

#[test]
fn test_case_without_underscores_only_touches_first_char() {
  for input in ["healthcheck", "userId", "HTTPRequest", "a", "getAccountV2", "éclair"] {
    let mut chars = input.chars();
    let first = chars.next().unwrap();
    let rest: String = chars.collect();

    let expected_pascal = format!("{}{rest}", first.to_uppercase());
    let expected_camel = format!("{}{rest}", first.to_lowercase());

    assert_eq!(to_pascal_case(input), expected_pascal, "pascal case of '{input}'");
    assert_eq!(to_camel_case(input), expected_camel, "camel case of '{input}'");
  }
}

#[test]
fn test_case_edge_cases() {
  struct Case {
    input: &'static str,
    pascal: &'static str,
    camel: &'static str,
  }

  let cases = [
    Case {
      input: "",
      pascal: "",
      camel: "",
    },
    Case {
      input: "_",
      pascal: "_",
      camel: "_",
    },
    Case {
      input: "_id",
      pascal: "_id",
      camel: "_id",
    },
    Case {
      input: "__id",
      pascal: "_Id",
      camel: "_Id",
    },
    Case {
      input: "id_",
      pascal: "Id",
      camel: "id",
    },
    Case {
      input: "a__b",
      pascal: "A_b",
      camel: "a_b",
    },
    Case {
      input: "user_1_id",
      pascal: "User1Id",
      camel: "user1Id",
    },
    Case {
      input: "Group_ID",
      pascal: "GroupID",
      camel: "groupID",
    },
  ];

  for case in cases {
    assert_eq!(to_pascal_case(case.input), case.pascal, "pascal case of '{}'", case.input);
    assert_eq!(to_camel_case(case.input), case.camel, "camel case of '{}'", case.input);
  }
}

#[test]
fn test_title_case() {
  assert_eq!(to_title_case("apiAccount"), "ApiAccount");
  assert_eq!(to_title_case("api_account"), "Api_account");
  assert_eq!(to_title_case("ApiAccount"), "ApiAccount");
  assert_eq!(to_title_case(""), "");
}

#[test]
fn test_clean_reference() {
  assert_eq!(clean_reference("#/definitions/ApiSession"), "ApiSession");
  assert_eq!(clean_reference("#/definitions/apiSession"), "ApiSession");
  assert_eq!(clean_reference("#/definitions/friendList"), "FriendList");
  assert_eq!(clean_reference("#/definitions/"), "");
}

#[test]
fn test_clean_reference_is_idempotent() {
  for reference in ["#/definitions/ApiSession", "#/definitions/protobufEmpty", "ApiSession"] {
    let once = clean_reference(reference);
    assert_eq!(clean_reference(&once), once, "cleaning '{reference}' twice");
  }
}

#[test]
fn test_strip_newlines() {
  assert_eq!(strip_newlines("A user\nwith a session."), "A user with a session.");
  assert_eq!(strip_newlines("one\r\ntwo\nthree"), "one two three");
  assert_eq!(strip_newlines("\n\n"), "  ");
  assert_eq!(strip_newlines("single line"), "single line");
}

#[test]
fn test_parameter_names() {
  assert_eq!(to_parameter_name("group_id"), "groupId");
  assert_eq!(to_parameter_name("string"), "@string");
  assert_eq!(to_parameter_name("Params"), "@params");
  assert_eq!(to_parameter_name("body"), "body");
}

#[test]
fn test_backing_field_names() {
  assert_eq!(to_backing_field_name("user"), "_user");
  assert_eq!(to_backing_field_name("group_users"), "_groupUsers");
}

#[test]
fn test_namespace() {
  assert_eq!(to_namespace("Nakama API v2"), "NakamaAPIV2");
  assert_eq!(to_namespace("petstore"), "Petstore");
  assert_eq!(to_namespace("2fa service"), "Api2faService");
  assert_eq!(to_namespace(""), "Api");
  assert_eq!(to_namespace("---"), "Api");
}
