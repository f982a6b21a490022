use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    recommendation::{
        entities::{RecommendationContext, RecommendationResult, TimeContext},
        helpers::{parse_model_output, SynthesisOutcome},
        ports::{LlmClient, RecommendationService},
        prompt::build_recommendation_prompt,
        value_objects::GetRecommendationsInput,
    },
    weather::ports::WeatherProvider,
};

impl<W, L> RecommendationService for Service<W, L>
where
    W: WeatherProvider,
    L: LlmClient,
{
    /// Runs the three-stage pipeline: weather fetch, time classification,
    /// recommendation synthesis. Control flows strictly forward and the two
    /// outbound calls are issued sequentially — the model call depends on
    /// the weather and time output.
    async fn get_recommendations(
        &self,
        input: GetRecommendationsInput,
    ) -> Result<RecommendationResult, CoreError> {
        // 1. Fetch current weather
        let weather = self
            .weather_provider
            .current_weather(input.latitude, input.longitude)
            .await?;

        // 2. Classify the caller-supplied time into a meal bucket
        let time = TimeContext::from_hhmm(&input.current_time)?;

        // 3. Render the instruction prompt and call the model once
        let prompt =
            build_recommendation_prompt(&weather, &time, &input.mood, &input.dietary_restrictions);
        let raw = self.llm_client.generate(prompt).await?;

        // 4. Decode the model output, degrading instead of failing on
        //    malformed responses
        let (recommendations, degraded) = match parse_model_output(&raw) {
            SynthesisOutcome::Generated(items) => (items, None),
            SynthesisOutcome::Degraded { items, reason } => (items, Some(reason)),
        };

        Ok(RecommendationResult {
            recommendations,
            degraded,
            context: RecommendationContext {
                weather,
                time,
                mood: input.mood,
                dietary_restrictions: input.dietary_restrictions,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        recommendation::{entities::MealCategory, ports::MockLlmClient},
        weather::{entities::WeatherSnapshot, ports::MockWeatherProvider},
    };

    const MODEL_OUTPUT: &str = r#"{"recommendations":[
        {"id":"1","name":"Poke bowl","description":"Fresh and colorful for a clear day"},
        {"id":"2","name":"Banh mi","description":"Bright flavors to match the mood"},
        {"id":"3","name":"Gazpacho","description":"Refreshing midday option"}
    ]}"#;

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            temperature: 21.5,
            condition: "Clear".to_string(),
            description: "clear sky".to_string(),
            humidity: 60,
            wind_speed: 3.2,
            feels_like: 20.9,
        }
    }

    fn input(mood: &str, current_time: &str) -> GetRecommendationsInput {
        GetRecommendationsInput {
            latitude: 40.7128,
            longitude: -74.0060,
            mood: mood.to_string(),
            current_time: current_time.to_string(),
            dietary_restrictions: Vec::new(),
        }
    }

    fn weather_ok() -> MockWeatherProvider {
        let mut weather = MockWeatherProvider::new();
        weather
            .expect_current_weather()
            .returning(|_, _| Box::pin(async { Ok(snapshot()) }));
        weather
    }

    #[tokio::test]
    async fn noon_in_new_york_yields_three_lunch_recommendations() {
        let mut weather = MockWeatherProvider::new();
        weather
            .expect_current_weather()
            .withf(|lat, lon| (*lat - 40.7128).abs() < 1e-9 && (*lon + 74.0060).abs() < 1e-9)
            .once()
            .returning(|_, _| Box::pin(async { Ok(snapshot()) }));

        let mut llm = MockLlmClient::new();
        llm.expect_generate()
            .withf(|prompt| {
                prompt.contains("Time: 12:00 (lunch)")
                    && prompt.contains("Mood: happy")
                    && prompt.contains("Temperature: 21.5°C")
            })
            .once()
            .returning(|_| Box::pin(async { Ok(MODEL_OUTPUT.to_string()) }));

        let service = Service::new(weather, llm);
        let result = service
            .get_recommendations(input("happy", "12:00"))
            .await
            .expect("pipeline succeeds");

        assert_eq!(result.recommendations.len(), 3);
        assert_eq!(result.recommendations[0].id, "1");
        assert_eq!(result.recommendations[0].name, "Poke bowl");
        assert!(result.degraded.is_none());
        assert_eq!(result.context.time.meal_category, MealCategory::Lunch);
        assert_eq!(result.context.mood, "happy");
        assert_eq!(result.context.weather, snapshot());
    }

    #[tokio::test]
    async fn unparsable_model_output_degrades_instead_of_failing() {
        let mut llm = MockLlmClient::new();
        llm.expect_generate()
            .returning(|_| Box::pin(async { Ok("Sure! Here are some ideas: ...".to_string()) }));

        let service = Service::new(weather_ok(), llm);
        let result = service
            .get_recommendations(input("bored", "23:15"))
            .await
            .expect("degraded path never raises");

        assert_eq!(result.recommendations.len(), 1);
        assert_eq!(result.recommendations[0].id, "1");
        assert_eq!(result.recommendations[0].name, "Error in recommendation");
        assert!(result.degraded.is_some());
        assert_eq!(
            result.context.time.meal_category,
            MealCategory::LateNightSnack
        );
    }

    #[tokio::test]
    async fn fenced_model_output_still_parses() {
        let mut llm = MockLlmClient::new();
        llm.expect_generate()
            .returning(|_| Box::pin(async { Ok(format!("```json\n{MODEL_OUTPUT}\n```")) }));

        let service = Service::new(weather_ok(), llm);
        let result = service
            .get_recommendations(input("happy", "08:30"))
            .await
            .expect("pipeline succeeds");

        assert_eq!(result.recommendations.len(), 3);
        assert!(result.degraded.is_none());
        assert_eq!(result.context.time.meal_category, MealCategory::Breakfast);
    }

    #[tokio::test]
    async fn weather_failure_propagates_and_skips_the_model_call() {
        let mut weather = MockWeatherProvider::new();
        weather.expect_current_weather().returning(|_, _| {
            Box::pin(async { Err(CoreError::WeatherProvider("city not found".to_string())) })
        });

        let mut llm = MockLlmClient::new();
        llm.expect_generate().never();

        let service = Service::new(weather, llm);
        let err = service
            .get_recommendations(input("happy", "12:00"))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::WeatherProvider(ref msg) if msg == "city not found"));
    }

    #[tokio::test]
    async fn malformed_time_propagates_and_skips_the_model_call() {
        let mut llm = MockLlmClient::new();
        llm.expect_generate().never();

        let service = Service::new(weather_ok(), llm);
        let err = service
            .get_recommendations(input("happy", "around noon"))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::TimeParse(_)));
    }

    #[tokio::test]
    async fn llm_transport_failure_propagates() {
        let mut llm = MockLlmClient::new();
        llm.expect_generate().returning(|_| {
            Box::pin(async { Err(CoreError::ExternalService("LLM API error".to_string())) })
        });

        let service = Service::new(weather_ok(), llm);
        let err = service
            .get_recommendations(input("happy", "12:00"))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::ExternalService(_)));
    }

    #[tokio::test]
    async fn dietary_restrictions_reach_the_prompt() {
        let mut llm = MockLlmClient::new();
        llm.expect_generate()
            .withf(|prompt| prompt.contains("Dietary restrictions: vegan"))
            .returning(|_| Box::pin(async { Ok(MODEL_OUTPUT.to_string()) }));

        let mut request = input("happy", "19:00");
        request.dietary_restrictions = vec!["vegan".to_string()];

        let service = Service::new(weather_ok(), llm);
        let result = service
            .get_recommendations(request)
            .await
            .expect("pipeline succeeds");

        assert_eq!(result.context.dietary_restrictions, vec!["vegan"]);
    }
}
