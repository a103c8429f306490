mod lookup_test;
mod pipeline_test;
