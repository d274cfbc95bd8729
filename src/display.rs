use crate::data::MockData;
use crate::location::{City, RouteDefinition};
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub fn routes_per_city(definitions: &[RouteDefinition]) -> Vec<(City, usize)> {
    City::ALL
        .iter()
        .map(|city| {
            let count = definitions
                .iter()
                .filter(|definition| definition.city == *city)
                .count();
            (*city, count)
        })
        .collect()
}

/// The report printed after a run. `definitions` must be the table the
/// records were generated from, in the same order.
pub struct Summary<'a> {
    pub mock_data: &'a MockData,
    pub definitions: &'a [RouteDefinition],
    pub output_dir: &'a Path,
}

impl Summary<'_> {
    fn first_route_index(&self, city: City) -> Option<usize> {
        self.definitions
            .iter()
            .position(|definition| definition.city == city)
    }

    fn write_sample<T: Serialize>(
        f: &mut Formatter,
        title: &str,
        sample: Option<&T>,
    ) -> Result<(), std::fmt::Error> {
        let Some(sample) = sample else {
            return Ok(());
        };
        let json = serde_json::to_string_pretty(sample).map_err(|_| std::fmt::Error)?;
        write!(f, "\n{title}:\n{json}\n")
    }
}

impl Display for Summary<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), std::fmt::Error> {
        let MockData { routes, fares } = self.mock_data;

        writeln!(
            f,
            "Generated {} routes and {} fares",
            routes.len(),
            fares.len()
        )?;
        writeln!(f, "Saved to {}/", self.output_dir.display())?;

        writeln!(f, "\nRoutes by City:")?;
        for (city, count) in routes_per_city(self.definitions) {
            writeln!(f, "   - {city}: {count} routes")?;
        }

        let nairobi_route = self
            .first_route_index(City::Nairobi)
            .and_then(|index| routes.get(index));
        let mombasa_route = self
            .first_route_index(City::Mombasa)
            .and_then(|index| routes.get(index));

        Self::write_sample(f, "Sample Nairobi route", nairobi_route)?;
        Self::write_sample(f, "Sample Mombasa route", mombasa_route)?;
        Self::write_sample(f, "Sample fare", fares.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::ROUTE_DEFINITIONS;

    #[test]
    fn reference_table_counts_per_city() {
        assert_eq!(
            routes_per_city(&ROUTE_DEFINITIONS),
            [
                (City::Nairobi, 5),
                (City::Mombasa, 4),
                (City::Nakuru, 3),
                (City::Eldoret, 3),
                (City::Kisumu, 4),
            ]
        );
    }
}
