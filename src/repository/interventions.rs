//! Intervention time domain methods on Store

use super::Store;
use crate::models::intervention::{
    CreateInterventionTime, InterventionTime, UpdateInterventionTime,
};

impl Store {
    pub fn interventions_list(&self) -> Vec<InterventionTime> {
        self.intervention_times.to_vec()
    }

    pub fn interventions_get_by_id(&self, id: &str) -> Option<&InterventionTime> {
        self.intervention_times.get(id)
    }

    pub fn interventions_create(&mut self, data: CreateInterventionTime) -> InterventionTime {
        let time = InterventionTime::new(self.intervention_times.next_id(), data);
        self.intervention_times.insert(time.clone());
        time
    }

    pub fn interventions_update(
        &mut self,
        id: &str,
        data: UpdateInterventionTime,
    ) -> Option<InterventionTime> {
        let time = self.intervention_times.get_mut(id)?;
        time.apply(data);
        Some(time.clone())
    }

    pub fn interventions_delete(&mut self, id: &str) -> bool {
        self.intervention_times.remove(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crud() {
        let mut store = Store::default();
        let time = store.interventions_create(CreateInterventionTime {
            name: "Morning".into(),
            time: "08:30".into(),
            days: vec![1, 3, 5],
        });
        assert!(time.id.starts_with("time_"));

        let updated = store
            .interventions_update(
                &time.id,
                UpdateInterventionTime {
                    days: Some(vec![0, 6]),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.days, vec![0, 6]);
        assert_eq!(updated.time, "08:30");

        assert!(store.interventions_delete(&time.id));
        assert!(store.interventions_list().is_empty());
        assert!(store
            .interventions_update(&time.id, UpdateInterventionTime::default())
            .is_none());
    }
}
