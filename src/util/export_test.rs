use super::*;

#[test]
fn data_uri_percent_encodes_json() {
    assert_eq!(
        json_data_uri("[{\"id\": 1}]"),
        "data:application/json;charset=utf-8,%5B%7B%22id%22%3A%201%7D%5D"
    );
}

#[test]
fn data_uri_for_empty_list() {
    assert_eq!(json_data_uri("[]"), "data:application/json;charset=utf-8,%5B%5D");
}
