use super::*;

use serde_json::Value;

//Flickr wraps every list in a container named after the method family. The order here
//matters: the first one found wins.
pub const RECORD_CONTAINERS: [&str; 3] = ["photos", "photoset", "photosets"];

//Inside the container, the list itself is one of these
const RECORD_LISTS: [&str; 2] = ["photo", "photoset"];

/// What a raw json response turned out to be
#[derive(Debug, PartialEq)]
pub enum Dispatch {
    Records(Vec<Record>),
    Failed { code: i64, message: String }, //Flickr's own {"stat":"fail"} envelope
    Unrecognized
}

/// Find the record list in a parsed response. Nothing here is ever an error on its own;
/// the caller decides what an unrecognized shape means.
pub fn dispatch(response: &Value) -> Dispatch
{
    if response.get("stat").and_then(Value::as_str) == Some("fail") {
        return Dispatch::Failed {
            code: response.get("code").and_then(Value::as_i64).unwrap_or_default(),
            message: response.get("message").and_then(Value::as_str).unwrap_or_default().to_string()
        };
    }

    let container = RECORD_CONTAINERS.iter().find_map(|key| response.get(*key));

    match container.and_then(find_list) {
        Some(list) => Dispatch::Records(cast_records(list)),
        None => Dispatch::Unrecognized
    }
}

fn find_list(container: &Value) -> Option<&Vec<Value>> {
    RECORD_LISTS.iter().find_map(|key| container.get(*key).and_then(Value::as_array))
}

/// Parse every record we can. A single broken entry shouldn't take the whole gallery down
pub fn cast_records(list: &[Value]) -> Vec<Record>
{
    list.iter().filter_map(|raw| {
        match Record::deserialize(raw) {
            Ok(record) => Some(record),
            Err(error) => {
                log::warn!("Skipping unparseable record: {} ({})", error, raw);
                None
            }
        }
    }).collect()
}
