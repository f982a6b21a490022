use crate::domain::{recommendation::entities::TimeContext, weather::entities::WeatherSnapshot};

/// Renders the single instruction prompt sent to the model. The template
/// demands strictly three recommendations in a fixed JSON shape and forbids
/// markdown fencing; the shape is enforced on our side after the call.
pub fn build_recommendation_prompt(
    weather: &WeatherSnapshot,
    time: &TimeContext,
    mood: &str,
    dietary_restrictions: &[String],
) -> String {
    let mut prompt = format!(
        "You are a food recommendation expert. Provide personalized food suggestions based on:\n\
         \n\
         Weather Impact:\n\
         - Hot weather (>25°C): Suggest cooling, refreshing foods\n\
         - Cold weather (<15°C): Suggest warming, comforting foods\n\
         - Rainy weather: Suggest cozy, warming foods\n\
         \n\
         Mood Impact:\n\
         - Happy: Celebratory foods, social sharing dishes, colorful foods\n\
         - Bored: Novel cuisines, exciting flavor combinations, interactive foods\n\
         \n\
         Time of Day:\n\
         - Morning (5-11): Breakfast foods\n\
         - Afternoon (11-15): Lunch options\n\
         - Evening (15-21): Dinner choices\n\
         - Late Night (21-5): Light snacks\n\
         \n\
         Current conditions:\n\
         Temperature: {temperature}°C (feels like {feels_like}°C)\n\
         Weather: {condition} ({description})\n\
         Humidity: {humidity}%\n\
         Wind speed: {wind_speed} m/s\n\
         Time: {time} ({meal_category})\n\
         Mood: {mood}\n",
        temperature = weather.temperature,
        feels_like = weather.feels_like,
        condition = weather.condition,
        description = weather.description,
        humidity = weather.humidity,
        wind_speed = weather.wind_speed,
        time = time.time,
        meal_category = time.meal_category,
    );

    if !dietary_restrictions.is_empty() {
        prompt.push_str(&format!(
            "Dietary restrictions: {}\n",
            dietary_restrictions.join(", ")
        ));
    }

    prompt.push_str(
        "\nSuggest exactly 3 suitable foods. Respond with a single JSON object of the shape\n\
         {\"recommendations\":[{\"id\":\"1\",\"name\":\"...\",\"description\":\"...\"}]}\n\
         where id is the ordinal \"1\" to \"3\", name is the dish and description explains\n\
         why it suits the current weather, time and mood. Respond with raw JSON only,\n\
         without markdown code fences.",
    );

    prompt
}
