use azmon_options::response;
use serde_json::json;

fn main() {
    let result = json!({
        "data": {
            "value": [
                { "subscriptionId": "abc-123", "displayName": "Production" },
                { "subscriptionId": "def-456", "displayName": "Staging" },
                { "subscriptionId": "abc-123", "displayName": "Production copy" },
            ]
        }
    });
    let subscriptions = response::parse_subscriptions_for_select(Some(&result));
    println!("got subscriptions: {:?}", subscriptions);
}
