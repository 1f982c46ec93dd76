//! Guest Read Errors

use salvo::http::StatusError;
use tracing::debug;

use vista::access::SecurityError;
use vista_app::domain::dashboards::DashboardsServiceError;

pub(crate) fn into_status_error(error: DashboardsServiceError) -> StatusError {
    match error {
        DashboardsServiceError::NotFound => StatusError::not_found(),
        DashboardsServiceError::DashboardAccessDenied(source) => {
            debug!("{source}");

            StatusError::forbidden().brief("Guest user cannot access this dashboard")
        }
        DashboardsServiceError::Forbidden(source) => {
            debug!("{source}");

            match source {
                SecurityError::NotGuest => {
                    StatusError::forbidden().brief("Only guest users may use this endpoint")
                }
                SecurityError::Chart(_) => {
                    StatusError::forbidden().brief("Guest user cannot access this chart")
                }
                SecurityError::Datasource(_) => {
                    StatusError::forbidden().brief("Guest user cannot access this dataset")
                }
                SecurityError::Table { .. } => {
                    StatusError::forbidden().brief("Guest users cannot query tables directly")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;
    use vista::{
        access::DashboardAccessDeniedError,
        catalog::{ChartId, DashboardId},
    };

    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(
            into_status_error(DashboardsServiceError::NotFound).code,
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn denials_map_to_403() {
        let denied = [
            DashboardsServiceError::DashboardAccessDenied(DashboardAccessDeniedError {
                dashboard: DashboardId::new(1),
            }),
            DashboardsServiceError::Forbidden(SecurityError::NotGuest),
            DashboardsServiceError::Forbidden(SecurityError::Chart(ChartId::new(1))),
        ];

        for error in denied {
            assert_eq!(into_status_error(error).code, StatusCode::FORBIDDEN);
        }
    }
}
