use actix_web::{
    body::EitherBody,
    http::header::{Accept, Header},
    http::StatusCode,
    web::Json,
    HttpResponse, HttpResponseBuilder, Responder,
};
use eyre::eyre;
use serde::Serialize;

/// Responder for serializing a list using a client-specified format, e.g. csv or json.
pub struct Ser<T: Serialize>(pub Vec<T>);

impl<T: Serialize> Ser<T> {
    fn to_csv(&self) -> eyre::Result<String> {
        let mut s = Vec::<u8>::new();
        let mut w = csv::WriterBuilder::new()
            .has_headers(true)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(&mut s);

        for element in &self.0 {
            w.serialize(element)?;
        }
        w.flush()?;
        drop(w);

        Ok(String::from_utf8(s)?)
    }
}

impl<T: Serialize> Responder for Ser<T> {
    type Body = EitherBody<String>;

    fn respond_to(self, request: &actix_web::HttpRequest) -> HttpResponse<Self::Body> {
        let mimes = Accept::parse(request)
            .ok()
            .map(|accept| accept.ranked())
            .unwrap_or_default();

        for mime in mimes {
            match mime.essence_str() {
                "application/json" => break, // JSON is the default
                "text/csv" => {
                    let response = self.to_csv().and_then(|s| {
                        HttpResponseBuilder::new(StatusCode::OK)
                            .insert_header(("Content-Type", "text/csv"))
                            .message_body(s)
                            .map_err(|e| eyre!("Failed to build csv response: {e}"))
                    });

                    return match response {
                        Ok(response) => response.map_into_left_body(),
                        Err(e) => {
                            log::error!("Failed to serialize list as csv: {e:?}");
                            HttpResponse::InternalServerError()
                                .finish()
                                .map_into_right_body()
                        }
                    };
                }
                _ => continue,
            };
        }

        Json(self.0).respond_to(request)
    }
}
