use crate::types::err::ConfigError;

/// A configuration option, with a name for lookup and (inclusive) bounds on the value.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    /// Sets the value of the option, if the value is within bounds.
    pub fn set(&mut self, value: T) -> Result<(), ConfigError> {
        if value < self.min || self.max < value {
            log::error!("Value for {} out of bounds", self.name);
            return Err(ConfigError::OutOfBounds(self.name.to_string()));
        }
        self.value = value;
        Ok(())
    }
}

impl<T: Clone + PartialOrd + std::str::FromStr> ConfigOption<T> {
    /// Reads a value for the option from a string and sets the option to the value, if possible.
    pub fn set_from_str(&mut self, value: &str) -> Result<(), ConfigError> {
        match value.trim().parse::<T>() {
            Ok(value) => self.set(value),
            Err(_) => Err(ConfigError::UnreadableValue(self.name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limit() -> ConfigOption<u32> {
        ConfigOption {
            name: "limit",
            min: 1,
            max: 10,
            value: 5,
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        let mut option = limit();
        assert!(option.set(1).is_ok());
        assert!(option.set(10).is_ok());
        assert_eq!(option.value, 10);

        assert_eq!(
            option.set(11),
            Err(ConfigError::OutOfBounds("limit".to_string()))
        );
        assert_eq!(option.value, 10);
    }

    #[test]
    fn from_str() {
        let mut option = limit();
        assert!(option.set_from_str(" 7 ").is_ok());
        assert_eq!(option.value, 7);

        assert_eq!(
            option.set_from_str("seven"),
            Err(ConfigError::UnreadableValue("limit".to_string()))
        );
    }
}
