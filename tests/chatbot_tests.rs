use krishimitra_backend::services::chatbot::{
    CROP_REPLY, FALLBACK_REPLY, Topic, WEATHER_REPLY, detect_topic, generate_reply,
};

#[test]
fn test_detect_topic() {
    assert_eq!(detect_topic("What crop should I plant?"), Topic::Crop);
    assert_eq!(detect_topic("How's the WEATHER today?"), Topic::Weather);
    assert_eq!(detect_topic("Tell me a joke"), Topic::Unknown);
}

#[test]
fn test_crop_checked_before_weather() {
    assert_eq!(detect_topic("crop and weather"), Topic::Crop);
    assert_eq!(detect_topic("weather for my CROP"), Topic::Crop);
}

#[test]
fn test_replies() {
    assert_eq!(generate_reply("CROP"), CROP_REPLY);
    assert_eq!(generate_reply("weather?"), WEATHER_REPLY);
    assert_eq!(generate_reply("hello"), FALLBACK_REPLY);
    assert_eq!(Topic::Unknown.reply(), FALLBACK_REPLY);
}
